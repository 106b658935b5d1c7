use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::{book::Book, catalog::Catalog, reader::Reader};

/// Point-in-time view of the catalog, ordered for stable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    /// One line per book, ordered by ISBN
    pub books: Vec<BookSummary>,
    /// One line per reader, ordered by id
    pub readers: Vec<ReaderSummary>,
}

/// Availability of a single book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub isbn: String,
    pub title: String,
    pub available: u32,
    pub total: u32,
}

/// Loans held by a single reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReaderSummary {
    pub id: u32,
    pub name: String,
    pub borrow_limit: usize,
    pub loans: BTreeMap<String, u32>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
            available: book.available_copies(),
            total: book.total_copies(),
        }
    }
}

impl From<&Reader> for ReaderSummary {
    fn from(reader: &Reader) -> Self {
        Self {
            id: reader.id(),
            name: reader.name().to_string(),
            borrow_limit: reader.borrow_limit(),
            loans: reader.active_loans().clone(),
        }
    }
}

impl CatalogSummary {
    /// Take a snapshot of the catalog
    #[must_use]
    pub fn capture(catalog: &Catalog) -> Self {
        let mut books: Vec<BookSummary> = catalog.books().map(BookSummary::from).collect();
        books.sort_by(|a, b| a.isbn.cmp(&b.isbn));

        let mut readers: Vec<ReaderSummary> = catalog.readers().map(ReaderSummary::from).collect();
        readers.sort_by_key(|reader| reader.id);

        Self { books, readers }
    }

    /// Render the snapshot as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the snapshot cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Books ===")?;
        for book in &self.books {
            writeln!(
                f,
                "{} \"{}\": {}/{} available",
                book.isbn, book.title, book.available, book.total
            )?;
        }

        writeln!(f, "=== Readers ===")?;
        for reader in &self.readers {
            write!(
                f,
                "{} {} ({} of {} titles)",
                reader.id,
                reader.name,
                reader.loans.len(),
                reader.borrow_limit
            )?;
            if reader.loans.is_empty() {
                writeln!(f)?;
            } else {
                let loans: Vec<String> =
                    reader.loans.iter().map(|(isbn, count)| format!("{isbn} x{count}")).collect();
                writeln!(f, ": {}", loans.join(", "))?;
            }
        }
        Ok(())
    }
}
