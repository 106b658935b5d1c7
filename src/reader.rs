use std::{collections::BTreeMap, fmt};

use serde::Serialize;

/// Number of distinct titles a reader may hold when no limit is given
pub const DEFAULT_BORROW_LIMIT: usize = 5;

/// A registered library reader and the titles they currently hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reader {
    /// Unique reader identifier
    id: u32,
    /// Display name
    name: String,
    /// Maximum number of distinct titles on loan at once
    borrow_limit: usize,
    /// Outstanding loans keyed by ISBN
    active_loans: BTreeMap<String, u32>,
}

impl Reader {
    /// Create a reader with the default borrow limit
    #[must_use]
    pub fn new(id: u32, name: &str) -> Self {
        Self::with_limit(id, name, DEFAULT_BORROW_LIMIT)
    }

    /// Create a reader with an explicit borrow limit
    #[must_use]
    pub fn with_limit(id: u32, name: &str, borrow_limit: usize) -> Self {
        Self { id, name: name.to_string(), borrow_limit, active_loans: BTreeMap::new() }
    }

    /// Whether another distinct title may be lent to this reader.
    ///
    /// The limit counts titles, not copies.
    #[must_use]
    pub fn can_borrow(&self) -> bool {
        self.active_loans.len() < self.borrow_limit
    }

    /// Record one more loan of `isbn`.
    ///
    /// This does not check [`Reader::can_borrow`]; the caller must.
    pub fn record_borrow(&mut self, isbn: &str) {
        let count = self.active_loans.entry(isbn.to_string()).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Record that one loan of `isbn` came back.
    ///
    /// Returns `false` if the reader holds no loan for `isbn`.
    pub fn record_return(&mut self, isbn: &str) -> bool {
        let Some(count) = self.active_loans.get_mut(isbn) else {
            return false;
        };
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.active_loans.remove(isbn);
        }
        true
    }

    /// Unique reader identifier
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum number of distinct titles on loan at once
    #[must_use]
    pub fn borrow_limit(&self) -> usize {
        self.borrow_limit
    }

    /// Number of distinct titles currently on loan
    #[must_use]
    pub fn active_titles(&self) -> usize {
        self.active_loans.len()
    }

    /// Number of copies of `isbn` this reader holds
    #[must_use]
    pub fn loan_count(&self, isbn: &str) -> u32 {
        self.active_loans.get(isbn).copied().unwrap_or(0)
    }

    /// All outstanding loans, ordered by ISBN
    #[must_use]
    pub fn active_loans(&self) -> &BTreeMap<String, u32> {
        &self.active_loans
    }
}

impl fmt::Display for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reader{{{}, {}, active={}}}", self.id, self.name, self.active_titles())
    }
}
