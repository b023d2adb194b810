use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::LibraryManager,
    render,
    types::{BookFilter, ShelfTableRow, Status},
    utils::BookKinds,
};

pub async fn shelf(
    search: Option<String>,
    kinds: Option<BookKinds>,
    status: Option<Status>,
    rating: Option<u8>,
    genre: Option<String>,
    author: Option<String>,
) {
    let criteria = BookFilter {
        kinds: kinds.map(|k| k.to_vec()).unwrap_or_default(),
        status: status.map(|s| vec![s]).unwrap_or_default(),
        genre: genre.map(|g| vec![g]).unwrap_or_default(),
        author: author.map(|a| vec![a]).unwrap_or_default(),
        rating: rating.unwrap_or(0),
        search: search.unwrap_or_default(),
    };
    let filtered = !criteria.is_empty();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Loading books...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match LibraryManager::refresh(Some(&criteria)).await {
        Ok(library) => {
            pb.finish_and_clear();
            render_shelf(&library);
        }
        Err(e) => {
            pb.finish_and_clear();
            if filtered {
                error!("Failed to apply filters. Err: {}", e);
            } else {
                error!("Failed to load books. Err: {}", e);
            }
        }
    }
}

/// Renders both shelves: the "currently reading" partition first, then the
/// rest of the library. Each render is a full replace of the previous
/// output; an empty partition gets its own empty-state message.
pub(crate) fn render_shelf(library: &LibraryManager) {
    let (reading, others) = library.partition();

    println!("\n{}", "Currently Reading".bold());
    if reading.is_empty() {
        println!(
            "{}",
            "No books currently being read. Start reading a book to see it here!".dimmed()
        );
    } else {
        let rows: Vec<ShelfTableRow> = reading.iter().map(|book| render::shelf_row(book)).collect();
        println!("{}", Table::new(rows));
    }

    println!("\n{}", "Library".bold());
    if others.is_empty() {
        println!(
            "{}",
            "No books in your library. Add your first book to get started!".dimmed()
        );
    } else {
        let rows: Vec<ShelfTableRow> = others.iter().map(|book| render::shelf_row(book)).collect();
        println!("{}", Table::new(rows));
    }
    println!();
}
