use std::collections::BTreeSet;

use shelfcli::types::{BookKind, Status};
use shelfcli::utils::*;

#[test]
fn test_parse_book_kinds_valid_inputs() {
    // Test single kind
    let result = parse_book_kinds("physical").unwrap();
    let kinds: Vec<BookKind> = result.iter().collect();
    assert_eq!(kinds, vec![BookKind::Physical]);

    // Test multiple kinds
    let result = parse_book_kinds("physical,kindle").unwrap();
    let kinds: Vec<BookKind> = result.iter().collect();
    assert_eq!(kinds, vec![BookKind::Physical, BookKind::Kindle]);

    // Test "all" keyword
    let result = parse_book_kinds("all").unwrap();
    let kinds: Vec<BookKind> = result.iter().collect();
    assert_eq!(kinds.len(), 4);
    assert!(kinds.contains(&BookKind::Physical));
    assert!(kinds.contains(&BookKind::Kindle));
    assert!(kinds.contains(&BookKind::Audible));
    assert!(kinds.contains(&BookKind::Ebook));

    // Test with spaces
    let result = parse_book_kinds("physical, audible").unwrap();
    let kinds: Vec<BookKind> = result.iter().collect();
    assert_eq!(kinds, vec![BookKind::Physical, BookKind::Audible]);

    // Test case insensitivity
    let result = parse_book_kinds("PHYSICAL,Ebook").unwrap();
    let kinds: Vec<BookKind> = result.iter().collect();
    assert_eq!(kinds, vec![BookKind::Physical, BookKind::Ebook]);
}

#[test]
fn test_parse_book_kinds_invalid_inputs() {
    // Test empty string
    let result = parse_book_kinds("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test whitespace only
    let result = parse_book_kinds("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test invalid kind
    let result = parse_book_kinds("hardcover");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'hardcover'"));

    // Test malformed input (empty segment)
    let result = parse_book_kinds("physical,,kindle");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("empty segment"));

    // Test mixed valid and invalid
    let result = parse_book_kinds("physical,invalid,kindle");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'invalid'"));
}

#[test]
fn test_parse_book_kinds_deduplication() {
    let result = parse_book_kinds("physical,physical,kindle").unwrap();
    let kinds: Vec<BookKind> = result.iter().collect();
    assert_eq!(kinds, vec![BookKind::Physical, BookKind::Kindle]);
}

#[test]
fn test_book_kinds_display() {
    // Test empty set (the "no filter" state)
    let empty_kinds = BookKinds(BTreeSet::new());
    assert_eq!(empty_kinds.to_string(), "");
    assert!(empty_kinds.is_empty());

    // Test single kind
    let mut set = BTreeSet::new();
    set.insert(BookKind::Physical);
    let single_kind = BookKinds(set);
    assert_eq!(single_kind.to_string(), "physical");

    // Test multiple kinds (should be sorted by declaration order)
    let mut set = BTreeSet::new();
    set.insert(BookKind::Ebook);
    set.insert(BookKind::Physical);
    set.insert(BookKind::Kindle);
    let multi_kinds = BookKinds(set);
    assert_eq!(multi_kinds.to_string(), "physical,kindle,ebook");
}

#[test]
fn test_book_kinds_default() {
    let default_kinds = BookKinds::default();
    assert!(default_kinds.is_empty());
    assert_eq!(default_kinds.to_vec(), Vec::<BookKind>::new());
}

#[test]
fn test_book_kind_all_constant() {
    assert_eq!(BookKind::ALL.len(), 4);
    assert!(BookKind::ALL.contains(&BookKind::Physical));
    assert!(BookKind::ALL.contains(&BookKind::Kindle));
    assert!(BookKind::ALL.contains(&BookKind::Audible));
    assert!(BookKind::ALL.contains(&BookKind::Ebook));
}

#[test]
fn test_parse_status_valid_inputs() {
    assert_eq!(parse_status("unread").unwrap(), Status::Unread);
    assert_eq!(parse_status("reading").unwrap(), Status::Reading);
    assert_eq!(parse_status("completed").unwrap(), Status::Completed);
    assert_eq!(parse_status("abandoned").unwrap(), Status::Abandoned);
    assert_eq!(parse_status("want_to_read").unwrap(), Status::WantToRead);

    // Hyphenated spelling and case insensitivity
    assert_eq!(parse_status("want-to-read").unwrap(), Status::WantToRead);
    assert_eq!(parse_status("Reading").unwrap(), Status::Reading);
    assert_eq!(parse_status(" completed ").unwrap(), Status::Completed);
}

#[test]
fn test_parse_status_invalid_inputs() {
    let result = parse_status("finished");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'finished'"));

    let result = parse_status("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));
}

#[test]
fn test_normalize_isbn() {
    assert_eq!(normalize_isbn("978-0-14-143951-8"), "9780141439518");
    assert_eq!(normalize_isbn("978 0141 439518"), "9780141439518");
    assert_eq!(normalize_isbn("9780141439518"), "9780141439518");
    assert_eq!(normalize_isbn(""), "");
}

#[test]
fn test_format_grouped() {
    assert_eq!(format_grouped(0), "0");
    assert_eq!(format_grouped(999), "999");
    assert_eq!(format_grouped(1000), "1,000");
    assert_eq!(format_grouped(12345), "12,345");
    assert_eq!(format_grouped(1234567), "1,234,567");
}

#[test]
fn test_status_wire_tokens() {
    assert_eq!(Status::Unread.to_string(), "unread");
    assert_eq!(Status::WantToRead.to_string(), "want_to_read");
    assert_eq!(Status::Other("on_hold".to_string()).to_string(), "on_hold");
}

#[test]
fn test_book_kind_wire_tokens() {
    assert_eq!(BookKind::Physical.to_string(), "physical");
    assert_eq!(BookKind::Ebook.to_string(), "ebook");
    assert_eq!(
        BookKind::Other("hardcover".to_string()).to_string(),
        "hardcover"
    );
}
