use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use super::shelf;
use crate::{
    api, error, info,
    management::LibraryManager,
    success,
    types::{Book, LookupResponse, Status},
    utils, warning,
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Add a book to the library")]
pub struct AddOptions {
    /// Book title
    #[clap(long)]
    pub title: Option<String>,

    /// Book author
    #[clap(long)]
    pub author: Option<String>,

    /// ISBN
    #[clap(long)]
    pub isbn: Option<String>,

    /// Book type(s), comma separated: physical, kindle, audible, ebook, all
    #[clap(long = "type", value_parser = utils::parse_book_kinds)]
    pub kind: Option<utils::BookKinds>,

    /// Reading status (unread, reading, completed, abandoned, want-to-read)
    #[clap(long, value_parser = utils::parse_status)]
    pub status: Option<Status>,

    /// Rating 0-5, 0 meaning unrated
    #[clap(long)]
    pub rating: Option<u8>,

    /// Genre
    #[clap(long)]
    pub genre: Option<String>,

    /// Page count
    #[clap(long)]
    pub pages: Option<u32>,

    /// Cover image URL
    #[clap(long)]
    pub cover: Option<String>,

    /// External link
    #[clap(long)]
    pub link: Option<String>,

    /// Description
    #[clap(long)]
    pub description: Option<String>,

    /// Personal notes
    #[clap(long)]
    pub notes: Option<String>,

    /// Prefill details from the ISBN lookup service before applying flags
    #[clap(long)]
    pub lookup: bool,
}

pub async fn add(opts: AddOptions) {
    // The lookup prefills the descriptive fields; explicit flags applied
    // afterwards win, mirroring a user editing the prefilled form.
    let mut prefill = None;
    if opts.lookup {
        let isbn = opts.isbn.clone().unwrap_or_default();
        if isbn.trim().is_empty() {
            error!("Please enter an ISBN");
        }

        let pb = ProgressBar::new_spinner();
        pb.set_message("Looking up ISBN...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        match api::lookup::lookup(&isbn).await {
            Ok(LookupResponse {
                success: true,
                book: Some(found),
                ..
            }) => {
                pb.finish_and_clear();
                success!("Book details populated successfully!");
                prefill = Some(found);
            }
            Ok(resp) => {
                pb.finish_and_clear();
                info!(
                    "{}",
                    resp.message.unwrap_or_else(|| "Book not found".to_string())
                );
            }
            Err(_) => {
                pb.finish_and_clear();
                warning!("Failed to lookup book details");
            }
        }
    }
    let prefill = prefill.unwrap_or_default();

    let book = Book {
        id: String::new(),
        isbn: opts.isbn.unwrap_or_default(),
        name: opts.title.or(prefill.title).unwrap_or_default(),
        author: opts.author.or(prefill.author).unwrap_or_default(),
        kinds: opts.kind.map(|k| k.to_vec()).unwrap_or_default(),
        description: opts.description.or(prefill.description).unwrap_or_default(),
        cover: opts.cover.or(prefill.cover).unwrap_or_default(),
        genre: opts.genre.or(prefill.genre).unwrap_or_default(),
        link: opts.link.unwrap_or_default(),
        status: opts.status.unwrap_or(Status::Unread),
        rating: opts.rating.unwrap_or(0).min(5),
        pages: opts.pages.or(prefill.pages).unwrap_or(0),
        notes: opts.notes.unwrap_or_default(),
        added: Utc::now(),
    };

    if book.name.trim().is_empty() {
        error!("Book title is required");
    }
    if book.author.trim().is_empty() {
        error!("Book author is required");
    }

    match api::books::create(&book).await {
        Ok(_) => {
            success!("Book added successfully!");
            match LibraryManager::refresh(None).await {
                Ok(library) => shelf::render_shelf(&library),
                Err(_) => warning!("Failed to load books"),
            }
        }
        Err(e) => error!("Failed to add book. Err: {}", e),
    }
}
