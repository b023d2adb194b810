use chrono::{TimeZone, Utc};
use shelfcli::render::*;
use shelfcli::types::{Book, BookKind, BookStats, Status};

// Helper function to create a test book
fn create_test_book(id: &str, name: &str, status: Status, rating: u8) -> Book {
    Book {
        id: id.to_string(),
        isbn: "9780441172719".to_string(),
        name: name.to_string(),
        author: "Frank Herbert".to_string(),
        kinds: vec![BookKind::Physical],
        description: "A desert planet.".to_string(),
        cover: "https://example.com/dune.jpg".to_string(),
        genre: "Science Fiction".to_string(),
        link: "https://example.com/dune".to_string(),
        status,
        rating,
        pages: 412,
        notes: String::new(),
        added: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
    }
}

#[test]
fn test_star_rating_glyph_counts() {
    // Every rating 1-5 renders exactly `rating` filled and `5 - rating`
    // outlined glyphs
    for rating in 1..=5u8 {
        let stars = star_rating(rating);
        let filled = stars.chars().filter(|c| *c == '★').count();
        let outlined = stars.chars().filter(|c| *c == '☆').count();
        assert_eq!(filled, rating as usize);
        assert_eq!(outlined, 5 - rating as usize);
        assert_eq!(stars.chars().count(), 5);
    }
}

#[test]
fn test_star_rating_zero_shows_label() {
    assert_eq!(star_rating(0), NO_RATING);
}

#[test]
fn test_star_rating_clamps_out_of_range() {
    assert_eq!(star_rating(9), star_rating(5));
}

#[test]
fn test_kind_display_names() {
    assert_eq!(kind_display_name(&BookKind::Physical), "Physical");
    assert_eq!(kind_display_name(&BookKind::Kindle), "Kindle");
    assert_eq!(kind_display_name(&BookKind::Audible), "Audible");
    assert_eq!(kind_display_name(&BookKind::Ebook), "E-Book");

    // Unknown kinds pass through verbatim
    assert_eq!(
        kind_display_name(&BookKind::Other("hardcover".to_string())),
        "hardcover"
    );
}

#[test]
fn test_kinds_display_name_joins_with_comma() {
    let kinds = vec![BookKind::Physical, BookKind::Audible];
    assert_eq!(kinds_display_name(&kinds), "Physical, Audible");

    // A single kind shows alone, an empty set as nothing
    assert_eq!(kinds_display_name(&[BookKind::Kindle]), "Kindle");
    assert_eq!(kinds_display_name(&[]), "");
}

#[test]
fn test_status_display_names() {
    assert_eq!(status_display_name(&Status::Unread), "Unread");
    assert_eq!(status_display_name(&Status::Reading), "Reading");
    assert_eq!(status_display_name(&Status::Completed), "Completed");
    assert_eq!(status_display_name(&Status::Abandoned), "Abandoned");
    assert_eq!(status_display_name(&Status::WantToRead), "Want to Read");

    // Unknown statuses pass through verbatim
    assert_eq!(
        status_display_name(&Status::Other("on_hold".to_string())),
        "on_hold"
    );
}

#[test]
fn test_card_from_book() {
    let book = create_test_book("1", "Dune", Status::Reading, 4);
    let card = BookCard::from_book(&book);

    assert_eq!(card.id, "1");
    assert_eq!(card.title, "Dune");
    assert_eq!(card.author, "Frank Herbert");
    assert_eq!(card.genre, "Science Fiction");
    assert_eq!(card.kind, "Physical");
    assert_eq!(card.status, "Reading");
    assert_eq!(card.rating, "★★★★☆");
    assert_eq!(card.cover, "https://example.com/dune.jpg");
    assert_eq!(card.added, "2024-01-15");
}

#[test]
fn test_card_missing_cover_uses_placeholder() {
    let mut book = create_test_book("1", "Dune", Status::Unread, 0);
    book.cover = String::new();
    assert_eq!(BookCard::from_book(&book).cover, PLACEHOLDER_COVER);

    // Blank counts as missing too
    book.cover = "   ".to_string();
    assert_eq!(BookCard::from_book(&book).cover, PLACEHOLDER_COVER);
}

#[test]
fn test_card_missing_genre_uses_label() {
    let mut book = create_test_book("1", "Dune", Status::Unread, 0);
    book.genre = String::new();
    assert_eq!(BookCard::from_book(&book).genre, NO_GENRE);
}

#[test]
fn test_shelf_row_projection() {
    let book = create_test_book("42", "Dune", Status::Completed, 5);
    let row = shelf_row(&book);

    assert_eq!(row.id, "42");
    assert_eq!(row.title, "Dune");
    assert_eq!(row.author, "Frank Herbert");
    assert_eq!(row.status, "Completed");
    assert_eq!(row.rating, "★★★★★");
}

#[test]
fn test_format_average_rating() {
    assert_eq!(format_average_rating(4.25), "4.2");
    assert_eq!(format_average_rating(3.0), "3.0");
    assert_eq!(format_average_rating(0.0), "N/A");
}

#[test]
fn test_stats_tiles() {
    let mut stats = BookStats::default();
    stats.total_books = 12;
    stats.by_type.insert("physical".to_string(), 5);
    stats.by_type.insert("audible".to_string(), 2);
    stats.by_type.insert("kindle".to_string(), 3);
    stats.by_type.insert("ebook".to_string(), 1);
    stats.by_status.insert("completed".to_string(), 7);
    stats.by_status.insert("reading".to_string(), 2);
    stats.pages_read = 12345;
    stats.average_rating = 3.75;

    let tiles = stats_tiles(&stats);
    assert_eq!(tiles.len(), 8);

    let value_of = |label: &str| {
        tiles
            .iter()
            .find(|t| t.stat == label)
            .map(|t| t.value.clone())
            .unwrap()
    };

    assert_eq!(value_of("Total Books"), "12");
    assert_eq!(value_of("Physical Books"), "5");
    assert_eq!(value_of("Audiobooks"), "2");
    // E-books sum kindle and ebook counts
    assert_eq!(value_of("E-Books"), "4");
    assert_eq!(value_of("Completed"), "7");
    assert_eq!(value_of("Currently Reading"), "2");
    assert_eq!(value_of("Pages Read"), "12,345");
    assert_eq!(value_of("Avg Rating"), "3.8");
}

#[test]
fn test_stats_tiles_empty_library() {
    let stats = BookStats::default();
    let tiles = stats_tiles(&stats);

    assert_eq!(tiles.len(), 8);
    let value_of = |label: &str| {
        tiles
            .iter()
            .find(|t| t.stat == label)
            .map(|t| t.value.clone())
            .unwrap()
    };

    assert_eq!(value_of("Total Books"), "0");
    assert_eq!(value_of("Pages Read"), "0");
    // No ratings at all shows the explicit marker, not 0.0
    assert_eq!(value_of("Avg Rating"), "N/A");
}
