use std::{io, path::PathBuf};

use thiserror::Error;

/// Reasons a loan request is rejected. None of them mutate the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LendError {
    /// No reader is registered under the id
    #[error("no reader registered with id {0}")]
    UnknownReader(u32),

    /// No book is catalogued under the ISBN
    #[error("no book catalogued with ISBN {0}")]
    UnknownBook(String),

    /// The reader already holds as many distinct titles as allowed
    #[error("reader {reader_id} already holds {limit} titles")]
    BorrowLimitReached { reader_id: u32, limit: usize },

    /// Every copy of the book is on loan
    #[error("no copies of {0} available")]
    NoCopiesAvailable(String),
}

/// Reasons a return is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReturnError {
    /// No reader is registered under the id
    #[error("no reader registered with id {0}")]
    UnknownReader(u32),

    /// No book is catalogued under the ISBN
    #[error("no book catalogued with ISBN {0}")]
    UnknownBook(String),

    /// The book has no copy out on loan
    #[error("no copies of {0} are out on loan")]
    NoOutstandingLoan(String),

    /// The book took a copy back, but the reader had no such loan on record.
    /// The book-side count has already been decremented when this is reported.
    #[error("reader {reader_id} has no loan of {isbn} on record")]
    LoanNotRecorded { reader_id: u32, isbn: String },
}

/// Failures while loading a catalog configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {message}")]
    Invalid { message: String },
}
