use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{api, error, render};

/// Loads the aggregate counters and renders the eight summary tiles.
pub async fn stats() {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Loading statistics...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match api::stats::stats().await {
        Ok(stats) => {
            pb.finish_and_clear();
            let tiles = render::stats_tiles(&stats);
            println!("{}", Table::new(tiles));
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to load statistics. Err: {}", e);
        }
    }
}
