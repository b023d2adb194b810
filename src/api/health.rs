use reqwest::Client;

use crate::config;

/// Pings the server's health endpoint and returns its status document.
pub async fn health() -> Result<serde_json::Value, reqwest::Error> {
    let api_url = format!("{uri}/health", uri = config::api_url());

    let client = Client::new();
    let response = client.get(&api_url).send().await?.error_for_status()?;

    response.json::<serde_json::Value>().await
}
