//! Seed data and scripted desk requests, loaded from TOML.
//!
//! The default configuration reproduces the sample library used by the demo
//! binary: one poetry volume with three copies, one reader, and a lend followed
//! by a return.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    book::{Author, Book, Publisher},
    catalog::Catalog,
    error::ConfigError,
    events::LoanRequest,
    reader::{DEFAULT_BORROW_LIMIT, Reader},
};

/// Full catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Borrow limit for readers that don't set their own
    #[serde(default = "default_borrow_limit")]
    pub default_borrow_limit: usize,
    /// Books to catalog, in registration order
    #[serde(default)]
    pub books: Vec<BookEntry>,
    /// Readers to register, in registration order
    #[serde(default)]
    pub readers: Vec<ReaderEntry>,
    /// Requests to replay against the catalog
    #[serde(default)]
    pub requests: Vec<LoanRequest>,
}

/// One book in the seed data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub title: String,
    pub isbn: String,
    pub author: Author,
    pub publisher: Publisher,
    pub year: i32,
    pub genre: String,
    #[serde(default = "default_total_copies")]
    pub total_copies: i32,
}

/// One reader in the seed data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub borrow_limit: Option<usize>,
}

/// Serde default for [`CatalogConfig::default_borrow_limit`]
fn default_borrow_limit() -> usize {
    DEFAULT_BORROW_LIMIT
}

/// Serde default for [`BookEntry::total_copies`]
fn default_total_copies() -> i32 {
    1
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_borrow_limit: DEFAULT_BORROW_LIMIT,
            books: vec![BookEntry {
                title: "Luceafarul".to_string(),
                isbn: "978-1".to_string(),
                author: Author::new("Mihai Eminescu", 1850),
                publisher: Publisher::new("Junimea", "Iasi"),
                year: 1883,
                genre: "poezie".to_string(),
                total_copies: 3,
            }],
            readers: vec![ReaderEntry { id: 100, name: "Ana Pop".to_string(), borrow_limit: None }],
            requests: vec![
                LoanRequest::Lend { reader_id: 100, isbn: "978-1".to_string() },
                LoanRequest::Return { reader_id: 100, isbn: "978-1".to_string() },
            ],
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise the
    /// errors of [`CatalogConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading catalog config");
        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&contents)
    }

    /// Check the seed data for entries the catalog could never hold
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a book without ISBN or a request
    /// without ISBN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(entry) = self.books.iter().find(|entry| entry.isbn.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                message: format!("book \"{}\" has an empty ISBN", entry.title),
            });
        }
        if let Some(request) = self.requests.iter().find(|request| request.isbn().trim().is_empty())
        {
            return Err(ConfigError::Invalid {
                message: format!("request \"{request}\" has an empty ISBN"),
            });
        }
        Ok(())
    }

    /// Build a catalog holding the configured books and readers.
    ///
    /// Duplicate ISBN or reader ids follow the catalog's first-registration-wins
    /// rule.
    #[must_use]
    pub fn build_catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();
        for entry in &self.books {
            catalog.add_book(entry.to_book());
        }
        for entry in &self.readers {
            let limit = entry.borrow_limit.unwrap_or(self.default_borrow_limit);
            catalog.register_reader(Reader::with_limit(entry.id, &entry.name, limit));
        }
        tracing::info!(
            books = catalog.book_count(),
            readers = catalog.reader_count(),
            "catalog built from config"
        );
        catalog
    }
}

impl BookEntry {
    /// Turn the entry into a catalog book
    #[must_use]
    pub fn to_book(&self) -> Book {
        Book::new(
            &self.title,
            &self.isbn,
            self.author.clone(),
            self.publisher.clone(),
            self.year,
            &self.genre,
        )
        .with_total_copies(self.total_copies)
    }
}
