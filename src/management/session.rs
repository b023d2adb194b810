use chrono::{DateTime, Utc};

use crate::types::{Book, BookForm, LookupBook};
use crate::utils;

/// One edit interaction over a single book.
///
/// Opening the session snapshots the editable fields; the snapshot is the
/// reference for the dirty check and the reset action and lives exactly as
/// long as the session. The id and creation timestamp are carried through
/// untouched so a save is a faithful full-record replace.
pub struct EditSession {
    book_id: String,
    added: DateTime<Utc>,
    original: BookForm,
    current: BookForm,
}

/// Names every editable field with its current display value, in form
/// order. Populate, read, diff and reset all go through [`BookForm`], so
/// this is the single field list in the crate.
pub fn form_fields(form: &BookForm) -> Vec<(&'static str, String)> {
    vec![
        ("title", form.name.clone()),
        ("author", form.author.clone()),
        ("isbn", form.isbn.clone()),
        (
            "type",
            form.kinds
                .iter()
                .map(|k| k.to_string())
                .collect::<Vec<_>>()
                .join(","),
        ),
        ("status", form.status.to_string()),
        ("rating", form.rating.to_string()),
        ("genre", form.genre.clone()),
        ("pages", form.pages.to_string()),
        ("cover", form.cover.clone()),
        ("link", form.link.clone()),
        ("description", form.description.clone()),
        ("notes", form.notes.clone()),
    ]
}

fn form_of(book: &Book) -> BookForm {
    BookForm {
        name: book.name.clone(),
        author: book.author.clone(),
        isbn: book.isbn.clone(),
        kinds: book.kinds.clone(),
        status: book.status.clone(),
        rating: book.rating,
        genre: book.genre.clone(),
        pages: book.pages,
        cover: book.cover.clone(),
        link: book.link.clone(),
        description: book.description.clone(),
        notes: book.notes.clone(),
    }
}

impl EditSession {
    /// Opens a session on one book: populates every editable field from
    /// the record and takes the snapshot.
    pub fn open(book: &Book) -> Self {
        let form = form_of(book);
        Self {
            book_id: book.id.clone(),
            added: book.added,
            original: form.clone(),
            current: form,
        }
    }

    pub fn book_id(&self) -> &str {
        &self.book_id
    }

    pub fn current(&self) -> &BookForm {
        &self.current
    }

    pub fn original(&self) -> &BookForm {
        &self.original
    }

    /// Assigns one field from raw user input. Numeric and enumerated
    /// fields are parsed; a parse failure leaves the session unchanged.
    /// The rating is clamped into 0-5.
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), String> {
        match field {
            "title" | "name" => self.current.name = value.to_string(),
            "author" => self.current.author = value.to_string(),
            "isbn" => self.current.isbn = value.to_string(),
            "type" => {
                self.current.kinds = if value.trim().is_empty() {
                    Vec::new()
                } else {
                    utils::parse_book_kinds(value)?.to_vec()
                };
            }
            "status" => self.current.status = utils::parse_status(value)?,
            "rating" => {
                let rating: u8 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid rating '{}', expected 0-5", value))?;
                self.current.rating = rating.min(5);
            }
            "pages" => {
                self.current.pages = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid page count '{}'", value))?;
            }
            "genre" => self.current.genre = value.to_string(),
            "cover" => self.current.cover = value.to_string(),
            "link" => self.current.link = value.to_string(),
            "description" => self.current.description = value.to_string(),
            "notes" => self.current.notes = value.to_string(),
            _ => return Err(format!("unknown field '{}'", field)),
        }
        Ok(())
    }

    /// Prefills the descriptive fields from a lookup record, the same six
    /// the lookup provider serves; absent values clear the field.
    pub fn apply_lookup(&mut self, found: &LookupBook) {
        self.current.name = found.title.clone().unwrap_or_default();
        self.current.author = found.author.clone().unwrap_or_default();
        self.current.genre = found.genre.clone().unwrap_or_default();
        self.current.pages = found.pages.unwrap_or(0);
        self.current.cover = found.cover.clone().unwrap_or_default();
        self.current.description = found.description.clone().unwrap_or_default();
    }

    /// True when the live form diverges from the snapshot, field by field.
    pub fn is_dirty(&self) -> bool {
        self.current != self.original
    }

    /// Names of the fields whose current value differs from the snapshot.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        form_fields(&self.original)
            .into_iter()
            .zip(form_fields(&self.current))
            .filter(|(original, current)| original.1 != current.1)
            .map(|(original, _)| original.0)
            .collect()
    }

    /// Restores every editable field to the snapshot. Does not close the
    /// session and never contacts the server.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }

    /// Client-side pre-check before a save: title and author must be
    /// non-blank.
    pub fn validate(&self) -> Result<(), String> {
        if self.current.name.trim().is_empty() {
            return Err("Book title is required".to_string());
        }
        if self.current.author.trim().is_empty() {
            return Err("Book author is required".to_string());
        }
        Ok(())
    }

    /// The full record to submit: current editable fields plus the
    /// carried-through id and creation timestamp.
    pub fn to_book(&self) -> Book {
        Book {
            id: self.book_id.clone(),
            isbn: self.current.isbn.clone(),
            name: self.current.name.clone(),
            author: self.current.author.clone(),
            kinds: self.current.kinds.clone(),
            description: self.current.description.clone(),
            cover: self.current.cover.clone(),
            genre: self.current.genre.clone(),
            link: self.current.link.clone(),
            status: self.current.status.clone(),
            rating: self.current.rating,
            pages: self.current.pages,
            notes: self.current.notes.clone(),
            added: self.added,
        }
    }

    /// The cover preview, shown only while a non-blank cover URL is set.
    pub fn cover_preview(&self) -> Option<&str> {
        let cover = self.current.cover.trim();
        if cover.is_empty() { None } else { Some(cover) }
    }
}
