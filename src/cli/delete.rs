use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::shelf;
use crate::{api, error, info, management::LibraryManager, success, utils, warning};

/// Deletes one book after an explicit confirmation naming its title.
/// Declining the confirmation sends no request at all.
pub async fn delete(id: String) {
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

    if !utils::confirm(&format!(
        "Are you sure you want to delete \"{}\"?",
        book.name
    )) {
        info!("Delete cancelled.");
        return;
    }

    match api::books::delete(book).await {
        Ok(_) => {
            success!("Book deleted successfully!");
            match LibraryManager::refresh(None).await {
                Ok(library) => shelf::render_shelf(&library),
                Err(_) => warning!("Failed to load books"),
            }
        }
        Err(e) => error!("Failed to delete book. Err: {}", e),
    }
}
