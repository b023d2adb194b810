//! Configuration management for the bookshelf CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. The bookshelf server address and
//! the optional write key are the only knobs this client has.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

/// Default address of the bookshelf server when nothing is configured.
/// Matches the server's own default listen address.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `shelfcli/.env`. A missing `.env` file is not
/// an error; every setting has a default.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/shelfcli/.env`
/// - macOS: `~/Library/Application Support/shelfcli/.env`
/// - Windows: `%LOCALAPPDATA%/shelfcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is set up, or an error string if
/// directory creation or file parsing fails.
///
/// # Example
///
/// ```
/// use shelfcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shelfcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the base URL of the bookshelf server.
///
/// Retrieves the `BOOKSHELF_API_URL` environment variable, falling back to
/// [`DEFAULT_API_URL`]. A trailing slash is stripped so endpoint paths can
/// be appended uniformly.
///
/// # Example
///
/// ```
/// let url = api_url(); // e.g., "http://localhost:4000"
/// ```
pub fn api_url() -> String {
    let url = env::var("BOOKSHELF_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    url.trim_end_matches('/').to_string()
}

/// Returns the write key sent with create/update/delete requests.
///
/// Retrieves the `BOOKSHELF_API_KEY` environment variable. The key is
/// vestigial in the default deployment (the server accepts an empty key
/// unless started with one configured), so absence means an empty string
/// rather than an error.
///
/// # Example
///
/// ```
/// let key = api_key(); // "" unless the server enforces a key
/// ```
pub fn api_key() -> String {
    env::var("BOOKSHELF_API_KEY").unwrap_or_default()
}
