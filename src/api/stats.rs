use reqwest::Client;

use crate::{config, types::BookStats};

/// Fetches the aggregate counters for the whole collection.
///
/// The record is fixed-shape: total count, per-kind and per-status counts,
/// pages read, and an average rating that is zero when no book is rated.
pub async fn stats() -> Result<BookStats, reqwest::Error> {
    let api_url = format!("{uri}/books/stats", uri = config::api_url());

    let client = Client::new();
    let response = client.get(&api_url).send().await?.error_for_status()?;

    response.json::<BookStats>().await
}
