//! # Bookshelf API Module
//!
//! This module provides the complete HTTP interface to the bookshelf
//! server. It is the only place in the crate that talks to the network;
//! every higher layer (CLI commands, the library manager, edit sessions)
//! goes through these functions and deals purely in the typed records from
//! [`crate::types`].
//!
//! ## Architecture
//!
//! The module follows a resource-based organization where each submodule
//! covers one domain of the server's REST surface:
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Bookshelf API Layer
//!     ├── Book Collection (list, create, update, delete, filter, featured)
//!     ├── Statistics (aggregate counters)
//!     ├── ISBN Lookup (metadata prefill)
//!     └── Health (server status)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Bookshelf REST Server
//! ```
//!
//! ## Endpoint Coverage
//!
//! | Method | Path | Function |
//! |---|---|---|
//! | GET | `/books` | [`books::list`] |
//! | GET | `/featured` | [`books::featured`] |
//! | POST | `/books` | [`books::create`] |
//! | PUT | `/books` | [`books::update`] |
//! | DELETE | `/books` | [`books::delete`] |
//! | POST | `/books/filter` | [`books::filter`] |
//! | GET | `/books/stats` | [`stats::stats`] |
//! | POST | `/books/lookup` | [`lookup::lookup`] |
//! | GET | `/health` | [`health::health`] |
//!
//! ## Error Handling Philosophy
//!
//! Every function returns `Result<_, reqwest::Error>`: transport failures
//! and non-success HTTP statuses both surface as errors via
//! `error_for_status`, and callers decide how to present them. Two cases
//! are deliberately *not* errors:
//!
//! - An ISBN lookup miss arrives as a `success: false` payload with a
//!   human-readable message. Only transport failures throw.
//! - The vestigial `key` accompanying writes carries no semantics
//!   client-side; an empty key is the normal case.
//!
//! There is no retry policy. A failed request is reported once by the
//! caller and never reattempted automatically; the previously rendered
//! view stays as it is.
//!
//! ## Write Envelope
//!
//! Create, update and delete all wrap the record in
//! [`crate::types::PostBook`] `{ book, key }`. Update is a full-record
//! replace keyed by `book.id`, not a patch; delete removes by identity.
//! None of the write responses carry a payload the client relies on; the
//! collection is reloaded afterwards to observe the server's state (the
//! assigned id of a create, for instance).
//!
//! ## Configuration Integration
//!
//! The base URL and write key come from [`crate::config`]; nothing here
//! reads the environment directly.
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde_json** - JSON serialization and deserialization

pub mod books;
pub mod health;
pub mod lookup;
pub mod stats;
