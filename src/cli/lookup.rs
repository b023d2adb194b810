use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{api, error, info, success, types::LookupResponse};

/// Queries the ISBN metadata service and prints what it knows. A miss is
/// reported as information, not a failure.
pub async fn lookup(isbn: String) {
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
            success!("Book found:");
            let absent = "-".to_string();
            println!("  {:<12} {}", "title", found.title.as_ref().unwrap_or(&absent));
            println!("  {:<12} {}", "author", found.author.as_ref().unwrap_or(&absent));
            println!("  {:<12} {}", "genre", found.genre.as_ref().unwrap_or(&absent));
            println!(
                "  {:<12} {}",
                "pages",
                found.pages.map(|p| p.to_string()).unwrap_or_else(|| absent.clone())
            );
            println!("  {:<12} {}", "cover", found.cover.as_ref().unwrap_or(&absent));
            println!(
                "  {:<12} {}",
                "description",
                found.description.as_ref().unwrap_or(&absent)
            );
        }
        Ok(resp) => {
            pb.finish_and_clear();
            info!(
                "{}",
                resp.message.unwrap_or_else(|| "Book not found".to_string())
            );
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to lookup book details. Err: {}", e);
        }
    }
}
