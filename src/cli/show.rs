use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, management::LibraryManager, render::BookCard};

/// Renders the full card of a single book.
pub async fn show(id: String) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Loading books...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let library = match LibraryManager::refresh(None).await {
        Ok(library) => {
            pb.finish_and_clear();
            library
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to load books. Err: {}", e);
        }
    };

    let book = match library.find(&id) {
        Some(book) => book,
        None => error!("No book with id '{}' in the library.", id),
    };

    let card = BookCard::from_book(book);

    println!("\n{} {}", card.title.bold(), format!("by {}", card.author).dimmed());
    println!("  {:<12} {}", "id", card.id);
    println!("  {:<12} {}", "genre", card.genre);
    println!("  {:<12} {}", "type", card.kind);
    println!("  {:<12} {}", "status", card.status);
    println!("  {:<12} {}", "rating", card.rating);
    println!("  {:<12} {}", "pages", card.pages);
    if !card.isbn.is_empty() {
        println!("  {:<12} {}", "isbn", card.isbn);
    }
    println!("  {:<12} {}", "added", card.added);
    println!("  {:<12} {}", "cover", card.cover);
    if !card.link.is_empty() {
        println!("  {:<12} {}", "link", card.link);
    }
    if !card.description.is_empty() {
        println!("  {:<12} {}", "description", card.description);
    }
    if !card.notes.is_empty() {
        println!("  {:<12} {}", "notes", card.notes);
    }
    println!();
}
