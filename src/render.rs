//! Book card rendering.
//!
//! Pure mapping from a [`Book`] record to its displayable form: display
//! names for kinds and statuses, star glyphs for ratings, placeholder
//! handling for missing fields, and the table-row/stat-tile view models the
//! CLI prints. Nothing in here touches the network or the terminal, which
//! keeps the whole layer testable.

use crate::types::{Book, BookKind, BookStats, ShelfTableRow, StatsTileRow, Status};
use crate::utils;

/// Cover image used when a book has none of its own.
pub const PLACEHOLDER_COVER: &str =
    "https://via.placeholder.com/160x240/f8f9fa/6c757d?text=No+Cover";

/// Label shown where a genre is missing.
pub const NO_GENRE: &str = "No genre";

/// Label shown instead of stars for an unrated book.
pub const NO_RATING: &str = "No rating";

/// Human-readable name of one book kind. Unknown kinds pass through
/// verbatim so server-side additions render without a client update.
pub fn kind_display_name(kind: &BookKind) -> String {
    match kind {
        BookKind::Physical => "Physical".to_string(),
        BookKind::Kindle => "Kindle".to_string(),
        BookKind::Audible => "Audible".to_string(),
        BookKind::Ebook => "E-Book".to_string(),
        BookKind::Other(s) => s.clone(),
    }
}

/// Display name for a kind set, members joined with a comma.
pub fn kinds_display_name(kinds: &[BookKind]) -> String {
    kinds
        .iter()
        .map(kind_display_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable name of a reading status; unknown values pass through
/// verbatim.
pub fn status_display_name(status: &Status) -> String {
    match status {
        Status::Unread => "Unread".to_string(),
        Status::Reading => "Reading".to_string(),
        Status::Completed => "Completed".to_string(),
        Status::Abandoned => "Abandoned".to_string(),
        Status::WantToRead => "Want to Read".to_string(),
        Status::Other(s) => s.clone(),
    }
}

/// Renders a rating as exactly five star glyphs, the first `rating` filled
/// and the remainder outlined. A rating of zero renders the "No rating"
/// label instead. Out-of-range ratings are clamped into 0-5.
pub fn star_rating(rating: u8) -> String {
    let rating = rating.min(5);
    if rating == 0 {
        return NO_RATING.to_string();
    }

    let mut stars = String::new();
    for i in 1..=5 {
        if i <= rating {
            stars.push('★');
        } else {
            stars.push('☆');
        }
    }
    stars
}

/// One book mapped to its display strings. The card carries the book's
/// identity so action commands (`edit`, `delete`, `open`) can name it, and
/// every derived string is computed exactly once here.
#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub kind: String,
    pub status: String,
    pub rating: String,
    pub cover: String,
    pub isbn: String,
    pub pages: u32,
    pub link: String,
    pub description: String,
    pub notes: String,
    pub added: String,
}

impl BookCard {
    pub fn from_book(book: &Book) -> Self {
        let cover = if book.cover.trim().is_empty() {
            PLACEHOLDER_COVER.to_string()
        } else {
            book.cover.clone()
        };
        let genre = if book.genre.trim().is_empty() {
            NO_GENRE.to_string()
        } else {
            book.genre.clone()
        };

        BookCard {
            id: book.id.clone(),
            title: book.name.clone(),
            author: book.author.clone(),
            genre,
            kind: kinds_display_name(&book.kinds),
            status: status_display_name(&book.status),
            rating: star_rating(book.rating),
            cover,
            isbn: book.isbn.clone(),
            pages: book.pages,
            link: book.link.clone(),
            description: book.description.clone(),
            notes: book.notes.clone(),
            added: book.added.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Projects one book into a shelf table row.
pub fn shelf_row(book: &Book) -> ShelfTableRow {
    let card = BookCard::from_book(book);
    ShelfTableRow {
        id: card.id,
        title: card.title,
        author: card.author,
        genre: card.genre,
        kind: card.kind,
        status: card.status,
        rating: card.rating,
    }
}

/// Formats the average rating to one decimal place, or `N/A` when no
/// ratings exist.
pub fn format_average_rating(average: f64) -> String {
    if average > 0.0 {
        format!("{:.1}", average)
    } else {
        "N/A".to_string()
    }
}

/// Builds the eight fixed summary tiles from the aggregate record. The
/// e-books tile sums the kindle and ebook counts.
pub fn stats_tiles(stats: &BookStats) -> Vec<StatsTileRow> {
    let by_type = |kind: &str| stats.by_type.get(kind).copied().unwrap_or(0);
    let by_status = |status: &str| stats.by_status.get(status).copied().unwrap_or(0);

    vec![
        StatsTileRow {
            stat: "Total Books".to_string(),
            value: stats.total_books.to_string(),
        },
        StatsTileRow {
            stat: "Physical Books".to_string(),
            value: by_type("physical").to_string(),
        },
        StatsTileRow {
            stat: "Audiobooks".to_string(),
            value: by_type("audible").to_string(),
        },
        StatsTileRow {
            stat: "E-Books".to_string(),
            value: (by_type("kindle") + by_type("ebook")).to_string(),
        },
        StatsTileRow {
            stat: "Completed".to_string(),
            value: by_status("completed").to_string(),
        },
        StatsTileRow {
            stat: "Currently Reading".to_string(),
            value: by_status("reading").to_string(),
        },
        StatsTileRow {
            stat: "Pages Read".to_string(),
            value: utils::format_grouped(stats.pages_read),
        },
        StatsTileRow {
            stat: "Avg Rating".to_string(),
            value: format_average_rating(stats.average_rating),
        },
    ]
}
