use crate::api;
use crate::types::{Book, BookFilter, Status};

/// The in-memory book collection for one command invocation.
///
/// The collection is a disposable, read-mostly copy of the server's current
/// state: it is rebuilt from the server on every refresh and never
/// persisted. Partitioning and record recovery by id are pure functions
/// over it.
pub struct LibraryManager {
    books: Vec<Book>,
}

impl LibraryManager {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Rebuilds the collection from the server. An empty (or absent)
    /// criteria set routes to the unfiltered listing, which the filter
    /// endpoint treats identically.
    pub async fn refresh(criteria: Option<&BookFilter>) -> Result<Self, reqwest::Error> {
        let books = match criteria {
            Some(filter) if !filter.is_empty() => api::books::filter(filter).await?,
            _ => api::books::list().await?,
        };
        Ok(Self { books: books.books })
    }

    /// Splits the collection into the "currently reading" shelf and
    /// everything else, preserving collection order. Every book lands in
    /// exactly one partition.
    pub fn partition(&self) -> (Vec<&Book>, Vec<&Book>) {
        self.books
            .iter()
            .partition(|book| book.status == Status::Reading)
    }

    /// Recovers one record by its server-assigned id.
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn count(&self) -> usize {
        self.books.len()
    }
}
