use std::fmt;

use serde::{Deserialize, Serialize};

/// Author of a book, copied by value into every book that names them
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Author {
    /// Full name
    name: String,
    /// Year of birth
    birth_year: i32,
}

impl Author {
    /// Create a new author record
    #[must_use]
    pub fn new(name: &str, birth_year: i32) -> Self {
        Self { name: name.to_string(), birth_year }
    }

    /// The author's full name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The author's year of birth
    #[must_use]
    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author{{{}, b. {}}}", self.name, self.birth_year)
    }
}

/// Publishing house of a book
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Publisher {
    /// Name of the publishing house
    name: String,
    /// City the publisher is based in
    city: String,
}

impl Publisher {
    /// Create a new publisher record
    #[must_use]
    pub fn new(name: &str, city: &str) -> Self {
        Self { name: name.to_string(), city: city.to_string() }
    }

    /// The publisher's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The city the publisher is based in
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Publisher{{{}, {}}}", self.name, self.city)
    }
}

/// A catalogued title together with its copy counters.
///
/// The book only ever changes through [`Book::borrow_one_copy`] and
/// [`Book::return_one_copy`], which keep `borrowed_copies <= total_copies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Title of the book
    title: String,
    /// Unique identifier used as the catalog key
    isbn: String,
    /// Owned snapshot of the author
    author: Author,
    /// Owned snapshot of the publisher
    publisher: Publisher,
    /// Year of publication
    publication_year: i32,
    /// Genre label
    genre: String,
    /// Number of physical copies, at least one
    total_copies: u32,
    /// Copies currently out on loan
    borrowed_copies: u32,
}

impl Book {
    /// Create a book with a single copy
    #[must_use]
    pub fn new(
        title: &str,
        isbn: &str,
        author: Author,
        publisher: Publisher,
        publication_year: i32,
        genre: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            isbn: isbn.to_string(),
            author,
            publisher,
            publication_year,
            genre: genre.to_string(),
            total_copies: 1,
            borrowed_copies: 0,
        }
    }

    /// Set the number of copies owned by the library.
    ///
    /// Counts below one are silently raised to one.
    #[must_use]
    pub fn with_total_copies(mut self, total_copies: i32) -> Self {
        self.total_copies = u32::try_from(total_copies).unwrap_or(0).max(1);
        self
    }

    /// Copies that can still be lent out
    #[must_use]
    pub fn available_copies(&self) -> u32 {
        self.total_copies.saturating_sub(self.borrowed_copies)
    }

    /// Take one copy off the shelf.
    ///
    /// Returns `false` without changing anything when every copy is already out.
    pub fn borrow_one_copy(&mut self) -> bool {
        if self.available_copies() == 0 {
            return false;
        }
        self.borrowed_copies = self.borrowed_copies.saturating_add(1);
        true
    }

    /// Put one copy back on the shelf.
    ///
    /// Returns `false` without changing anything when no copy is out.
    pub fn return_one_copy(&mut self) -> bool {
        if self.borrowed_copies == 0 {
            return false;
        }
        self.borrowed_copies = self.borrowed_copies.saturating_sub(1);
        true
    }

    /// Title of the book
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// ISBN the book is catalogued under
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Author snapshot
    #[must_use]
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Publisher snapshot
    #[must_use]
    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// Year of publication
    #[must_use]
    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    /// Genre label
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Number of copies the library owns
    #[must_use]
    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    /// Number of copies currently on loan
    #[must_use]
    pub fn borrowed_copies(&self) -> u32 {
        self.borrowed_copies
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book{{\"{}\" ({}) {}, {}, year={}, genre={}, available={}/{}}}",
            self.title,
            self.isbn,
            self.author,
            self.publisher,
            self.publication_year,
            self.genre,
            self.available_copies(),
            self.total_copies
        )
    }
}
