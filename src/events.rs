use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LendError, ReturnError};

/// A request made at the lending desk
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LoanRequest {
    /// Lend one copy of a book to a reader
    Lend { reader_id: u32, isbn: String },
    /// Take one copy of a book back from a reader
    Return { reader_id: u32, isbn: String },
}

impl LoanRequest {
    /// Reader the request is made for
    #[must_use]
    pub fn reader_id(&self) -> u32 {
        match self {
            Self::Lend { reader_id, .. } | Self::Return { reader_id, .. } => *reader_id,
        }
    }

    /// ISBN the request concerns
    #[must_use]
    pub fn isbn(&self) -> &str {
        match self {
            Self::Lend { isbn, .. } | Self::Return { isbn, .. } => isbn,
        }
    }
}

impl fmt::Display for LoanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lend { reader_id, isbn } => write!(f, "lend {reader_id} {isbn}"),
            Self::Return { reader_id, isbn } => write!(f, "return {reader_id} {isbn}"),
        }
    }
}

/// Outcome of a single lend or return attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanEvent {
    /// A copy was lent and recorded on both sides
    Lent { reader_id: u32, isbn: String },
    /// A copy came back and was cleared on both sides
    Returned { reader_id: u32, isbn: String },
    /// The lend attempt was rejected
    LendRejected { reader_id: u32, isbn: String, reason: LendError },
    /// The return attempt was rejected
    ReturnRejected { reader_id: u32, isbn: String, reason: ReturnError },
}

impl LoanEvent {
    /// Build the event describing a lend attempt
    #[must_use]
    pub fn from_lend(reader_id: u32, isbn: &str, result: &Result<(), LendError>) -> Self {
        let isbn = isbn.to_string();
        match result {
            Ok(()) => Self::Lent { reader_id, isbn },
            Err(reason) => Self::LendRejected { reader_id, isbn, reason: reason.clone() },
        }
    }

    /// Build the event describing a return attempt
    #[must_use]
    pub fn from_return(reader_id: u32, isbn: &str, result: &Result<(), ReturnError>) -> Self {
        let isbn = isbn.to_string();
        match result {
            Ok(()) => Self::Returned { reader_id, isbn },
            Err(reason) => Self::ReturnRejected { reader_id, isbn, reason: reason.clone() },
        }
    }

    /// Whether the attempt was committed
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Lent { .. } | Self::Returned { .. })
    }
}
