//! Borrow/return scenarios through the public API

use chrono::NaiveDate;
use elidune_circulation::{
    models::{CreateDocument, Document, DocumentKind, ReaderLogin},
    repository::Catalog,
    services::readers::Reader,
    AppConfig, AppError, Library,
};

fn library_with_reader(name: &str) -> Library {
    let mut library = Library::new(&AppConfig::default());
    library
        .login_reader(&ReaderLogin {
            username: name.to_string(),
            password: "longenough".to_string(),
        })
        .expect("reader login");
    library
}

fn create(id: &str, title: &str, copies: u32, kind: DocumentKind) -> CreateDocument {
    CreateDocument {
        id: id.to_string(),
        title: title.to_string(),
        author: "Author".to_string(),
        copies,
        kind,
    }
}

#[test]
fn test_le_pain_nu_runs_out_of_copies() {
    let mut library = library_with_reader("amina");
    library
        .add_document(create("B1", "Le Pain Nu", 2, DocumentKind::Book { page_count: 160 }))
        .unwrap();

    assert_eq!(library.borrow("amina", "B1").unwrap(), "amina borrowed 'Le Pain Nu'.");
    library.borrow("amina", "B1").unwrap();

    assert!(!library.catalog.find_by_id("B1").unwrap().is_available());
    let err = library.borrow("amina", "B1").unwrap_err();
    assert!(matches!(err, AppError::Unavailable(_)));
    assert_eq!(err.to_string(), "The document 'Le Pain Nu' is not available.");
    assert_eq!(library.catalog.find_by_id("B1").unwrap().available_copies, 0);
}

#[test]
fn test_limit_of_three_loans() {
    let mut library = library_with_reader("amina");
    for id in ["A", "B", "C", "D"] {
        library
            .add_document(create(id, id, 1, DocumentKind::Dvd { duration: 90 }))
            .unwrap();
    }

    for id in ["A", "B", "C"] {
        library.borrow("amina", id).unwrap();
    }
    let err = library.borrow("amina", "D").unwrap_err();
    assert!(matches!(err, AppError::LimitReached { max: 3, .. }));

    library.return_document("amina", "A").unwrap();
    library.borrow("amina", "D").unwrap();

    assert_eq!(library.current_loans("amina").unwrap(), "Current loans of amina: B, C, D");
    assert_eq!(library.history("amina").unwrap(), "Loan history of amina: A, B, C, D");
    assert_eq!(library.catalog.find_by_id("A").unwrap().available_copies, 1);
}

#[test]
fn test_return_restores_copy_count() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let mut library = library_with_reader("amina");
    library
        .add_document(create(
            "M1",
            "Zamane",
            3,
            DocumentKind::Magazine { issue_number: 158, publication_date: date },
        ))
        .unwrap();

    library.borrow("amina", "M1").unwrap();
    library.return_document("amina", "M1").unwrap();

    let doc = library.catalog.find_by_id("M1").unwrap();
    assert_eq!(doc.available_copies, 3);
    assert_eq!(doc.total_copies, 3);
}

#[test]
fn test_return_not_borrowed_keeps_count() {
    let mut library = library_with_reader("amina");
    library
        .add_document(create("B1", "Le Pain Nu", 2, DocumentKind::Book { page_count: 160 }))
        .unwrap();

    let err = library.return_document("amina", "B1").unwrap_err();
    assert!(matches!(err, AppError::NotBorrowed { .. }));
    assert_eq!(library.catalog.find_by_id("B1").unwrap().available_copies, 2);
}

#[test]
fn test_duplicate_ids_shadow() {
    let mut catalog = Catalog::new();
    let first = catalog.add(Document::book("X1", "First", "A", 10, 1)).key();
    catalog.add(Document::dvd("X1", "Second", "B", 90, 1));

    assert_eq!(catalog.find_by_id("X1").unwrap().key(), first);
    assert_eq!(catalog.list_all().len(), 2);
}

#[test]
fn test_readers_do_not_share_ledgers() {
    let mut catalog = Catalog::new();
    catalog.add(Document::book("B1", "Le Pain Nu", "Mohamed Choukri", 160, 2));

    let mut amina = Reader::new("amina", 3);
    let mut youssef = Reader::new("youssef", 3);

    amina.borrow(catalog.get_by_id_mut("B1").unwrap()).unwrap();
    let err = youssef
        .return_document(catalog.get_by_id_mut("B1").unwrap())
        .unwrap_err();
    assert_eq!(err.to_string(), "youssef has not borrowed the document 'Le Pain Nu'.");
    assert_eq!(catalog.find_by_id("B1").unwrap().available_copies, 1);
}
