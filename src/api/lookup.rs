use reqwest::Client;

use crate::{
    config,
    types::{LookupRequest, LookupResponse},
    utils,
};

/// Looks up best-effort metadata for an ISBN.
///
/// Hyphens and spaces are stripped from the ISBN before sending. A miss is
/// not an error: the server answers `success: false` with a message, and
/// only transport failures surface as `Err`.
pub async fn lookup(isbn: &str) -> Result<LookupResponse, reqwest::Error> {
    let api_url = format!("{uri}/books/lookup", uri = config::api_url());
    let payload = LookupRequest {
        isbn: utils::normalize_isbn(isbn),
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .json(&payload)
        .send()
        .await?
        .error_for_status()?;

    response.json::<LookupResponse>().await
}
