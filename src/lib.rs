//! Library catalog and lending desk.
//!
//! This crate keeps books and readers in a [`Catalog`] and coordinates
//! lending so that a loan is recorded on both the book and the reader, while
//! respecting copy counts and per-reader borrowing limits.

pub mod book;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod observers;
pub mod reader;
pub mod summary;

pub use book::{Author, Book, Publisher};
pub use catalog::{Catalog, LoanDiscrepancy};
pub use config::CatalogConfig;
pub use error::{ConfigError, LendError, ReturnError};
pub use events::{LoanEvent, LoanRequest};
pub use observers::{EventRecorder, LoanLogger, LoanObserver};
pub use reader::{DEFAULT_BORROW_LIMIT, Reader};
pub use summary::CatalogSummary;
