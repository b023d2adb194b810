use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, management::LibraryManager, success, warning};

/// Opens a book's stored link in the default browser.
pub async fn open(id: String) {
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

    if book.link.trim().is_empty() {
        warning!("No link stored for \"{}\".", book.name);
        return;
    }

    if webbrowser::open(&book.link).is_err() {
        error!("Failed to open {}", book.link);
    }
    success!("Opened {}", book.link);
}
