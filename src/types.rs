use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

/// How a book is owned or consumed. A book can carry several kinds at once
/// (e.g. a physical copy plus the Audible version).
///
/// Kind strings the server introduces later deserialize into `Other` and
/// render verbatim, so the client stays forward-compatible.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookKind {
    Physical,
    Kindle,
    Audible,
    Ebook,
    #[serde(untagged)]
    Other(String),
}

impl BookKind {
    /// The four kinds the server currently defines.
    pub const ALL: [BookKind; 4] = [
        BookKind::Physical,
        BookKind::Kindle,
        BookKind::Audible,
        BookKind::Ebook,
    ];

    /// The wire token for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            BookKind::Physical => "physical",
            BookKind::Kindle => "kindle",
            BookKind::Audible => "audible",
            BookKind::Ebook => "ebook",
            BookKind::Other(s) => s,
        }
    }
}

impl fmt::Display for BookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a book sits in its reading lifecycle. Exactly one per book.
///
/// Unknown status strings pass through as `Other`, same as [`BookKind`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Unread,
    Reading,
    Completed,
    Abandoned,
    WantToRead,
    #[serde(untagged)]
    Other(String),
}

impl Status {
    /// The wire token for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Unread => "unread",
            Status::Reading => "reading",
            Status::Completed => "completed",
            Status::Abandoned => "abandoned",
            Status::WantToRead => "want_to_read",
            Status::Other(s) => s,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One library entry as the bookshelf server stores it.
///
/// `id` is server-assigned and stable; `added` is set client-side at
/// creation time and immutable thereafter. The remaining text fields are
/// optional and serialize as empty strings when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "type", default, deserialize_with = "kind_scalar_or_list")]
    pub kinds: Vec<BookKind>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub link: String,
    pub status: Status,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub notes: String,
    pub added: DateTime<Utc>,
}

/// Accepts either a bare kind or a list of kinds for the `type` field; a
/// bare scalar is normalized to a single-element list and `null` (the
/// server's encoding of "no kinds") to an empty one.
fn kind_scalar_or_list<'de, D>(deserializer: D) -> Result<Vec<BookKind>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScalarOrList {
        Scalar(BookKind),
        List(Vec<BookKind>),
    }

    Ok(match Option::<ScalarOrList>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(ScalarOrList::Scalar(kind)) => vec![kind],
        Some(ScalarOrList::List(kinds)) => kinds,
    })
}

/// Treats a JSON `null` as the type's default; the server encodes empty
/// collections that way.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Collection envelope returned by `GET /books` and `POST /books/filter`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Books {
    #[serde(default, deserialize_with = "null_to_default")]
    pub books: Vec<Book>,
}

/// Write envelope for create/update/delete. The `key` is a vestigial write
/// key (empty unless the server enforces one); it is always sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostBook {
    pub book: Book,
    #[serde(default)]
    pub key: String,
}

/// Server-side filter criteria for `POST /books/filter`. An empty criteria
/// set is equivalent to fetching the full collection; callers route that
/// case to the plain listing instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookFilter {
    #[serde(rename = "type", default)]
    pub kinds: Vec<BookKind>,
    #[serde(default)]
    pub status: Vec<Status>,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub author: Vec<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub search: String,
}

impl BookFilter {
    /// True when no criterion is set, i.e. the filter would match every book.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
            && self.status.is_empty()
            && self.genre.is_empty()
            && self.author.is_empty()
            && self.rating == 0
            && self.search.trim().is_empty()
    }
}

/// Aggregate counters served by `GET /books/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookStats {
    #[serde(default)]
    pub total_books: u64,
    #[serde(default)]
    pub by_type: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_status: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_genre: BTreeMap<String, u64>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub pages_read: u64,
}

/// Request body for `POST /books/lookup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    pub isbn: String,
}

/// Response of the ISBN metadata lookup. A miss is a payload
/// (`success: false` plus a message), never a transport error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub book: Option<LookupBook>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Best-effort metadata record returned by the lookup endpoint. Every field
/// is optional; the provider sends only what it knows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupBook {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
}

/// The editable fields of one book, keyed by name via
/// [`crate::management::EditSession`]. Used uniformly for populate, read,
/// diff and reset so no two field lists can drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct BookForm {
    pub name: String,
    pub author: String,
    pub isbn: String,
    pub kinds: Vec<BookKind>,
    pub status: Status,
    pub rating: u8,
    pub genre: String,
    pub pages: u32,
    pub cover: String,
    pub link: String,
    pub description: String,
    pub notes: String,
}

#[derive(Tabled)]
pub struct ShelfTableRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub kind: String,
    pub status: String,
    pub rating: String,
}

#[derive(Tabled)]
pub struct StatsTileRow {
    pub stat: String,
    pub value: String,
}
