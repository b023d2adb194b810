use chrono::{TimeZone, Utc};
use shelfcli::management::{EditSession, form_fields};
use shelfcli::types::{Book, BookKind, LookupBook, Status};

// Helper function to create a fully populated test book
fn create_test_book() -> Book {
    Book {
        id: "7".to_string(),
        isbn: "9780441172719".to_string(),
        name: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        kinds: vec![BookKind::Physical, BookKind::Audible],
        description: "A desert planet.".to_string(),
        cover: "https://example.com/dune.jpg".to_string(),
        genre: "Science Fiction".to_string(),
        link: "https://example.com/dune".to_string(),
        status: Status::Reading,
        rating: 4,
        pages: 412,
        notes: "Reread someday.".to_string(),
        added: Utc.with_ymd_and_hms(2023, 6, 1, 9, 30, 0).unwrap(),
    }
}

#[test]
fn test_open_populates_every_editable_field() {
    let book = create_test_book();
    let session = EditSession::open(&book);

    let form = session.current();
    assert_eq!(form.name, book.name);
    assert_eq!(form.author, book.author);
    assert_eq!(form.isbn, book.isbn);
    assert_eq!(form.kinds, book.kinds);
    assert_eq!(form.status, book.status);
    assert_eq!(form.rating, book.rating);
    assert_eq!(form.genre, book.genre);
    assert_eq!(form.pages, book.pages);
    assert_eq!(form.cover, book.cover);
    assert_eq!(form.link, book.link);
    assert_eq!(form.description, book.description);
    assert_eq!(form.notes, book.notes);

    // The snapshot equals the populated form, so a fresh session is clean
    assert_eq!(session.current(), session.original());
    assert!(!session.is_dirty());
}

#[test]
fn test_save_without_edits_round_trips_the_record() {
    let book = create_test_book();
    let session = EditSession::open(&book);

    // Saving an untouched session submits a record equal to the original,
    // id and creation timestamp included
    assert_eq!(session.to_book(), book);
}

#[test]
fn test_dirty_check_triggers_iff_values_diverge() {
    let book = create_test_book();
    let mut session = EditSession::open(&book);

    session.set("title", "Dune Messiah").unwrap();
    assert!(session.is_dirty());
    assert_eq!(session.changed_fields(), vec!["title"]);

    // Setting the field back to the snapshot value clears the dirty state
    session.set("title", "Dune").unwrap();
    assert!(!session.is_dirty());
    assert!(session.changed_fields().is_empty());
}

#[test]
fn test_reset_restores_snapshot() {
    let book = create_test_book();
    let mut session = EditSession::open(&book);

    session.set("title", "Changed").unwrap();
    session.set("rating", "1").unwrap();
    session.set("cover", "").unwrap();
    assert!(session.is_dirty());
    assert!(session.cover_preview().is_none());

    session.reset();

    assert!(!session.is_dirty());
    assert_eq!(session.current(), session.original());
    // Cover preview resynchronizes with the restored value
    assert_eq!(session.cover_preview(), Some("https://example.com/dune.jpg"));
}

#[test]
fn test_set_parses_enumerated_and_numeric_fields() {
    let book = create_test_book();
    let mut session = EditSession::open(&book);

    session.set("status", "completed").unwrap();
    assert_eq!(session.current().status, Status::Completed);

    session.set("type", "kindle,ebook").unwrap();
    assert_eq!(
        session.current().kinds,
        vec![BookKind::Kindle, BookKind::Ebook]
    );

    session.set("type", "").unwrap();
    assert!(session.current().kinds.is_empty());

    session.set("pages", "500").unwrap();
    assert_eq!(session.current().pages, 500);

    session.set("rating", "3").unwrap();
    assert_eq!(session.current().rating, 3);

    // Ratings clamp into 0-5
    session.set("rating", "9").unwrap();
    assert_eq!(session.current().rating, 5);
}

#[test]
fn test_set_rejects_bad_input_without_changing_state() {
    let book = create_test_book();
    let mut session = EditSession::open(&book);

    assert!(session.set("rating", "lots").is_err());
    assert!(session.set("pages", "many").is_err());
    assert!(session.set("status", "finished").is_err());
    assert!(session.set("type", "hardcover").is_err());
    assert!(session.set("publisher", "Ace").is_err());

    assert!(!session.is_dirty());
}

#[test]
fn test_validate_requires_title_and_author() {
    let book = create_test_book();
    let mut session = EditSession::open(&book);

    assert!(session.validate().is_ok());

    session.set("title", "   ").unwrap();
    let err = session.validate().unwrap_err();
    assert_eq!(err, "Book title is required");

    session.reset();
    session.set("author", "").unwrap();
    let err = session.validate().unwrap_err();
    assert_eq!(err, "Book author is required");
}

#[test]
fn test_apply_lookup_prefills_descriptive_fields() {
    let book = create_test_book();
    let mut session = EditSession::open(&book);

    let found = LookupBook {
        title: Some("Dune (40th Anniversary Edition)".to_string()),
        author: Some("Frank Herbert".to_string()),
        genre: Some("Fiction".to_string()),
        pages: Some(528),
        cover: Some("https://covers.example.com/dune-40.jpg".to_string()),
        description: None,
        isbn: None,
    };
    session.apply_lookup(&found);

    let form = session.current();
    assert_eq!(form.name, "Dune (40th Anniversary Edition)");
    assert_eq!(form.genre, "Fiction");
    assert_eq!(form.pages, 528);
    assert_eq!(form.cover, "https://covers.example.com/dune-40.jpg");
    // Absent provider values clear the field
    assert_eq!(form.description, "");
    // Non-descriptive fields are untouched
    assert_eq!(form.isbn, book.isbn);
    assert_eq!(form.status, book.status);
    assert_eq!(form.notes, book.notes);

    assert!(session.is_dirty());
}

#[test]
fn test_cover_preview_visibility() {
    let mut book = create_test_book();
    book.cover = String::new();
    let mut session = EditSession::open(&book);

    // No cover, no preview
    assert!(session.cover_preview().is_none());

    // Preview follows every edit to the cover field
    session.set("cover", "https://example.com/new.jpg").unwrap();
    assert_eq!(session.cover_preview(), Some("https://example.com/new.jpg"));

    session.set("cover", "   ").unwrap();
    assert!(session.cover_preview().is_none());
}

#[test]
fn test_form_fields_names_every_editable_field() {
    let book = create_test_book();
    let session = EditSession::open(&book);

    let fields = form_fields(session.current());
    let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            "title",
            "author",
            "isbn",
            "type",
            "status",
            "rating",
            "genre",
            "pages",
            "cover",
            "link",
            "description",
            "notes"
        ]
    );

    // Kind sets and statuses render as wire tokens
    let value_of = |name: &str| {
        fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.clone())
            .unwrap()
    };
    assert_eq!(value_of("type"), "physical,audible");
    assert_eq!(value_of("status"), "reading");
}
