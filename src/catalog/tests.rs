use crate::{
    book::{Author, Book, Publisher},
    catalog::{Catalog, LoanDiscrepancy},
    error::{LendError, ReturnError},
    events::{LoanEvent, LoanRequest},
    observers::EventRecorder,
    reader::Reader,
};

/// Build a book with the given ISBN, title and copy count
fn book(isbn: &str, title: &str, copies: i32) -> Book {
    Book::new(
        title,
        isbn,
        Author::new("Mihai Eminescu", 1850),
        Publisher::new("Junimea", "Iasi"),
        1883,
        "poezie",
    )
    .with_total_copies(copies)
}

/// Helper function to set up a catalog with one three-copy book and one reader
fn setup_test_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    assert!(catalog.add_book(book("978-1", "Luceafarul", 3)));
    assert!(catalog.register_reader(Reader::new(100, "Ana Pop")));
    catalog
}

/// Available copies of a book known to be in the catalog
fn available(catalog: &Catalog, isbn: &str) -> Option<u32> {
    catalog.book(isbn).map(Book::available_copies)
}

#[test]
fn test_lend_and_return_round_trip() {
    let mut catalog = setup_test_catalog();

    assert!(catalog.lend_book(100, "978-1"));
    assert_eq!(available(&catalog, "978-1"), Some(2));
    assert_eq!(catalog.reader(100).map(|r| r.loan_count("978-1")), Some(1));

    assert!(catalog.return_book(100, "978-1"));
    assert_eq!(available(&catalog, "978-1"), Some(3));
    assert_eq!(catalog.reader(100).map(Reader::active_titles), Some(0));
    assert!(catalog.loan_discrepancies().is_empty());
}

#[test]
fn test_unknown_reader_leaves_book_untouched() {
    let mut catalog = setup_test_catalog();

    assert!(!catalog.lend_book(999, "978-1"));
    assert_eq!(catalog.try_lend_book(999, "978-1"), Err(LendError::UnknownReader(999)));
    assert_eq!(available(&catalog, "978-1"), Some(3));
}

#[test]
fn test_unknown_book_leaves_reader_untouched() {
    let mut catalog = setup_test_catalog();

    assert_eq!(
        catalog.try_lend_book(100, "978-404"),
        Err(LendError::UnknownBook("978-404".to_string()))
    );
    assert_eq!(catalog.reader(100).map(Reader::active_titles), Some(0));
}

#[test]
fn test_borrow_limit_is_checked_before_book_is_touched() {
    let mut catalog = setup_test_catalog();
    assert!(catalog.add_book(book("978-2", "Poezii", 1)));
    assert!(catalog.register_reader(Reader::with_limit(7, "Ion Creanga", 1)));

    assert!(catalog.lend_book(7, "978-1"));
    assert_eq!(
        catalog.try_lend_book(7, "978-2"),
        Err(LendError::BorrowLimitReached { reader_id: 7, limit: 1 })
    );
    assert_eq!(available(&catalog, "978-2"), Some(1));
}

#[test]
fn test_limit_counts_titles_even_for_a_held_title() {
    let mut catalog = setup_test_catalog();
    assert!(catalog.register_reader(Reader::with_limit(7, "Ion Creanga", 1)));

    assert!(catalog.lend_book(7, "978-1"));
    assert!(!catalog.lend_book(7, "978-1"));
    assert_eq!(available(&catalog, "978-1"), Some(2));
}

#[test]
fn test_no_copies_available() {
    let mut catalog = setup_test_catalog();
    assert!(catalog.add_book(book("978-2", "Poezii", 1)));
    assert!(catalog.register_reader(Reader::new(101, "Ion Creanga")));

    assert!(catalog.lend_book(100, "978-2"));
    assert_eq!(
        catalog.try_lend_book(101, "978-2"),
        Err(LendError::NoCopiesAvailable("978-2".to_string()))
    );
    assert_eq!(catalog.reader(101).map(Reader::active_titles), Some(0));
}

#[test]
fn test_return_with_no_outstanding_loan() {
    let mut catalog = setup_test_catalog();
    let before = catalog.reader(100).cloned();

    assert_eq!(
        catalog.try_return_book(100, "978-1"),
        Err(ReturnError::NoOutstandingLoan("978-1".to_string()))
    );
    assert_eq!(catalog.reader(100).cloned(), before);
    assert_eq!(available(&catalog, "978-1"), Some(3));
}

#[test]
fn test_return_by_wrong_reader_leaves_a_discrepancy() {
    let mut catalog = setup_test_catalog();
    assert!(catalog.register_reader(Reader::new(101, "Ion Creanga")));
    assert!(catalog.lend_book(100, "978-1"));

    assert_eq!(
        catalog.try_return_book(101, "978-1"),
        Err(ReturnError::LoanNotRecorded { reader_id: 101, isbn: "978-1".to_string() })
    );

    // The book side already took the copy back.
    assert_eq!(available(&catalog, "978-1"), Some(3));
    assert_eq!(catalog.outstanding_loans("978-1"), 1);
    assert_eq!(
        catalog.loan_discrepancies(),
        vec![LoanDiscrepancy { isbn: "978-1".to_string(), borrowed_copies: 0, recorded_loans: 1 }]
    );
}

#[test]
fn test_first_registration_wins() {
    let mut catalog = setup_test_catalog();

    assert!(!catalog.add_book(book("978-1", "Impostor", 9)));
    assert_eq!(catalog.book_count(), 1);
    assert_eq!(catalog.book("978-1").map(Book::title), Some("Luceafarul"));
    assert_eq!(catalog.book("978-1").map(Book::total_copies), Some(3));

    assert!(!catalog.register_reader(Reader::new(100, "Someone Else")));
    assert_eq!(catalog.reader(100).map(Reader::name), Some("Ana Pop"));
}

#[test]
fn test_empty_isbn_is_refused() {
    let mut catalog = Catalog::new();
    assert!(!catalog.add_book(book("", "Untitled", 1)));
    assert_eq!(catalog.book_count(), 0);
}

#[test]
fn test_observers_see_one_event_per_attempt() {
    let mut catalog = setup_test_catalog();
    let recorder = EventRecorder::new();
    catalog.register_observer(Box::new(recorder.clone()));

    assert!(catalog.lend_book(100, "978-1"));
    assert!(!catalog.lend_book(5, "978-1"));
    assert!(catalog.return_book(100, "978-1"));

    assert_eq!(
        recorder.events(),
        vec![
            LoanEvent::Lent { reader_id: 100, isbn: "978-1".to_string() },
            LoanEvent::LendRejected {
                reader_id: 5,
                isbn: "978-1".to_string(),
                reason: LendError::UnknownReader(5),
            },
            LoanEvent::Returned { reader_id: 100, isbn: "978-1".to_string() },
        ]
    );
}

#[test]
fn test_process_request_dispatches() {
    let mut catalog = setup_test_catalog();

    let lend = LoanRequest::Lend { reader_id: 100, isbn: "978-1".to_string() };
    let give_back = LoanRequest::Return { reader_id: 100, isbn: "978-1".to_string() };

    assert!(catalog.process_request(&lend));
    assert_eq!(catalog.outstanding_loans("978-1"), 1);
    assert!(catalog.process_request(&give_back));
    assert!(!catalog.process_request(&give_back));
}

#[test]
fn test_display() {
    let catalog = setup_test_catalog();
    assert_eq!(catalog.to_string(), "Catalog{books=1, readers=1}");
}
