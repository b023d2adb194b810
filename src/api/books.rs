use reqwest::Client;

use crate::{
    config,
    types::{Book, BookFilter, Books, PostBook},
};

/// Fetches the full book collection in server order.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Books)` - The collection envelope, possibly empty
/// - `Err(reqwest::Error)` - Network error, API error, or decode failure
pub async fn list() -> Result<Books, reqwest::Error> {
    let api_url = format!("{uri}/books", uri = config::api_url());

    let client = Client::new();
    let response = client.get(&api_url).send().await?.error_for_status()?;

    response.json::<Books>().await
}

/// Fetches the curated featured ISBN set.
///
/// Only the legacy variant of the listing view ever rendered these; the
/// operation is kept for the wire contract and the `info --featured`
/// command. The server encodes an empty set as `null`.
pub async fn featured() -> Result<Vec<String>, reqwest::Error> {
    let api_url = format!("{uri}/featured", uri = config::api_url());

    let client = Client::new();
    let response = client.get(&api_url).send().await?.error_for_status()?;

    let featured = response.json::<Option<Vec<String>>>().await?;
    Ok(featured.unwrap_or_default())
}

/// Creates one book. The server assigns the id; callers reload the
/// collection to observe it.
pub async fn create(book: &Book) -> Result<(), reqwest::Error> {
    let api_url = format!("{uri}/books", uri = config::api_url());
    let payload = PostBook {
        book: book.clone(),
        key: config::api_key(),
    };

    let client = Client::new();
    client
        .post(&api_url)
        .json(&payload)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

/// Replaces one book wholesale, keyed by `book.id`.
pub async fn update(book: &Book) -> Result<(), reqwest::Error> {
    let api_url = format!("{uri}/books", uri = config::api_url());
    let payload = PostBook {
        book: book.clone(),
        key: config::api_key(),
    };

    let client = Client::new();
    client
        .put(&api_url)
        .json(&payload)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

/// Removes one book by identity.
pub async fn delete(book: &Book) -> Result<(), reqwest::Error> {
    let api_url = format!("{uri}/books", uri = config::api_url());
    let payload = PostBook {
        book: book.clone(),
        key: config::api_key(),
    };

    let client = Client::new();
    client
        .delete(&api_url)
        .json(&payload)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

/// Fetches the subset of books matching the given criteria.
///
/// An empty criteria set is equivalent to [`list`]; callers are expected
/// to route that case there instead of issuing a filter request.
pub async fn filter(criteria: &BookFilter) -> Result<Books, reqwest::Error> {
    let api_url = format!("{uri}/books/filter", uri = config::api_url());

    let client = Client::new();
    let response = client
        .post(&api_url)
        .json(criteria)
        .send()
        .await?
        .error_for_status()?;

    response.json::<Books>().await
}
