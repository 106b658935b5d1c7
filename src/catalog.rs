use std::{collections::HashMap, fmt};

use crate::{
    book::Book,
    error::{LendError, ReturnError},
    events::{LoanEvent, LoanRequest},
    observers::LoanObserver,
    reader::Reader,
};

/// An ISBN whose book-side loan count disagrees with the readers' records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanDiscrepancy {
    /// ISBN of the affected book
    pub isbn: String,
    /// Copies the book believes are out
    pub borrowed_copies: u32,
    /// Sum of loans of this ISBN across all readers
    pub recorded_loans: u32,
}

/// The library catalog and lending desk.
///
/// Owns every book (keyed by ISBN) and every reader (keyed by id). A lend is
/// recorded on both sides or on neither; see [`Catalog::try_return_book`] for
/// the one return that can leave the sides apart.
pub struct Catalog {
    /// Books keyed by ISBN
    books: HashMap<String, Book>,
    /// Readers keyed by id
    readers: HashMap<u32, Reader>,
    /// Registered loan outcome observers
    observers: Vec<Box<dyn LoanObserver>>,
}

// Manual implementation of Debug for Catalog
impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("books", &self.books)
            .field("readers", &self.readers)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self { books: HashMap::new(), readers: HashMap::new(), observers: Vec::new() }
    }

    /// Add a book under its ISBN.
    ///
    /// The first book registered under an ISBN wins; later ones are ignored.
    /// Books with an empty ISBN are refused. Returns whether the book was added.
    pub fn add_book(&mut self, book: Book) -> bool {
        if book.isbn().is_empty() {
            tracing::warn!(title = book.title(), "refusing book without ISBN");
            return false;
        }
        if self.books.contains_key(book.isbn()) {
            tracing::warn!(isbn = book.isbn(), "book already catalogued, keeping the first");
            return false;
        }
        tracing::debug!(isbn = book.isbn(), title = book.title(), "book added");
        self.books.insert(book.isbn().to_string(), book);
        true
    }

    /// Register a reader under their id.
    ///
    /// The first reader registered under an id wins. Returns whether the reader
    /// was added.
    pub fn register_reader(&mut self, reader: Reader) -> bool {
        if self.readers.contains_key(&reader.id()) {
            tracing::warn!(reader_id = reader.id(), "reader already registered, keeping the first");
            return false;
        }
        tracing::debug!(reader_id = reader.id(), name = reader.name(), "reader registered");
        self.readers.insert(reader.id(), reader);
        true
    }

    /// Register an observer to be notified of every loan outcome
    pub fn register_observer(&mut self, observer: Box<dyn LoanObserver>) {
        self.observers.push(observer);
    }

    /// Lend one copy of `isbn` to a reader, reporting only success
    pub fn lend_book(&mut self, reader_id: u32, isbn: &str) -> bool {
        self.try_lend_book(reader_id, isbn).is_ok()
    }

    /// Lend one copy of `isbn` to a reader.
    ///
    /// Every precondition is checked before anything changes; the book is
    /// mutated first because it is the only side that can still refuse.
    ///
    /// # Errors
    ///
    /// Returns a [`LendError`] naming the first failed precondition. The
    /// catalog is left untouched in that case.
    pub fn try_lend_book(&mut self, reader_id: u32, isbn: &str) -> Result<(), LendError> {
        let result = self.lend(reader_id, isbn);
        self.notify(&LoanEvent::from_lend(reader_id, isbn, &result));
        result
    }

    /// Both-sided lend without notification
    fn lend(&mut self, reader_id: u32, isbn: &str) -> Result<(), LendError> {
        let reader =
            self.readers.get_mut(&reader_id).ok_or(LendError::UnknownReader(reader_id))?;
        let book =
            self.books.get_mut(isbn).ok_or_else(|| LendError::UnknownBook(isbn.to_string()))?;

        if !reader.can_borrow() {
            return Err(LendError::BorrowLimitReached { reader_id, limit: reader.borrow_limit() });
        }
        if !book.borrow_one_copy() {
            return Err(LendError::NoCopiesAvailable(isbn.to_string()));
        }
        reader.record_borrow(isbn);
        Ok(())
    }

    /// Take one copy of `isbn` back from a reader, reporting only success
    pub fn return_book(&mut self, reader_id: u32, isbn: &str) -> bool {
        self.try_return_book(reader_id, isbn).is_ok()
    }

    /// Take one copy of `isbn` back from a reader.
    ///
    /// # Errors
    ///
    /// Returns a [`ReturnError`] when the reader or book is unknown or the book
    /// has no copy out, leaving the catalog untouched. If the book had a copy
    /// out but the reader holds no loan of it, the book side has already been
    /// decremented and [`ReturnError::LoanNotRecorded`] is returned; the
    /// mismatch shows up in [`Catalog::loan_discrepancies`].
    pub fn try_return_book(&mut self, reader_id: u32, isbn: &str) -> Result<(), ReturnError> {
        let result = self.take_back(reader_id, isbn);
        self.notify(&LoanEvent::from_return(reader_id, isbn, &result));
        result
    }

    /// Both-sided return without notification
    fn take_back(&mut self, reader_id: u32, isbn: &str) -> Result<(), ReturnError> {
        let reader =
            self.readers.get_mut(&reader_id).ok_or(ReturnError::UnknownReader(reader_id))?;
        let book =
            self.books.get_mut(isbn).ok_or_else(|| ReturnError::UnknownBook(isbn.to_string()))?;

        if !book.return_one_copy() {
            return Err(ReturnError::NoOutstandingLoan(isbn.to_string()));
        }
        if !reader.record_return(isbn) {
            tracing::warn!(reader_id, isbn, "copy returned without a matching reader loan");
            return Err(ReturnError::LoanNotRecorded { reader_id, isbn: isbn.to_string() });
        }
        Ok(())
    }

    /// Apply a scripted desk request, reporting only success
    pub fn process_request(&mut self, request: &LoanRequest) -> bool {
        match request {
            LoanRequest::Lend { reader_id, isbn } => self.lend_book(*reader_id, isbn),
            LoanRequest::Return { reader_id, isbn } => self.return_book(*reader_id, isbn),
        }
    }

    /// Tell every observer about an outcome
    fn notify(&self, event: &LoanEvent) {
        for observer in &self.observers {
            observer.on_loan_event(event);
        }
    }

    /// Look up a book by ISBN
    #[must_use]
    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// Look up a reader by id
    #[must_use]
    pub fn reader(&self, reader_id: u32) -> Option<&Reader> {
        self.readers.get(&reader_id)
    }

    /// All books, in no particular order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// All readers, in no particular order
    pub fn readers(&self) -> impl Iterator<Item = &Reader> {
        self.readers.values()
    }

    /// Number of catalogued books
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of registered readers
    #[must_use]
    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    /// Copies of `isbn` on loan according to the readers' records
    #[must_use]
    pub fn outstanding_loans(&self, isbn: &str) -> u32 {
        self.readers
            .values()
            .map(|reader| reader.loan_count(isbn))
            .fold(0, u32::saturating_add)
    }

    /// Every book whose borrowed count disagrees with the readers' records,
    /// ordered by ISBN
    #[must_use]
    pub fn loan_discrepancies(&self) -> Vec<LoanDiscrepancy> {
        let mut discrepancies: Vec<LoanDiscrepancy> = self
            .books
            .values()
            .filter_map(|book| {
                let recorded_loans = self.outstanding_loans(book.isbn());
                (recorded_loans != book.borrowed_copies()).then(|| LoanDiscrepancy {
                    isbn: book.isbn().to_string(),
                    borrowed_copies: book.borrowed_copies(),
                    recorded_loans,
                })
            })
            .collect();
        discrepancies.sort_by(|a, b| a.isbn.cmp(&b.isbn));
        discrepancies
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Catalog{{books={}, readers={}}}", self.books.len(), self.readers.len())
    }
}

// Include tests module
#[cfg(test)]
mod tests;
