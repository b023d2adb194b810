//! # CLI Module
//!
//! This module provides the command-line interface layer for shelfcli, the
//! terminal client of the virtual bookshelf server. It implements all
//! user-facing commands and coordinates between the API client, the
//! in-memory state managers, and the rendering helpers.
//!
//! ## Command Categories
//!
//! ### Browsing
//!
//! - [`shelf`] - Loads the (optionally filtered) collection, partitions it
//!   into "currently reading" and the rest, and renders one card row per
//!   book in collection order with distinct empty states per shelf
//! - [`show`] - Renders the full card of a single book
//! - [`stats`] - Renders the eight aggregate summary tiles
//! - [`info`] - Featured ISBN set, server health, collection count
//!
//! ### Changing the collection
//!
//! - [`add`] - Creates a book, optionally prefilled from the ISBN lookup
//! - [`edit`] - Interactive edit session with snapshot, dirty check,
//!   reset-to-original and discard confirmation
//! - [`delete`] - Removes a book after an explicit confirmation naming it
//!
//! ### Lookup
//!
//! - [`lookup`] - Queries the ISBN metadata service directly
//! - [`open`] - Opens a book's stored link in the default browser
//!
//! ## Data Flow Pattern
//!
//! Every command follows the same chain: parse input → API call(s) →
//! update in-memory state → render. Rendering is always a full replace of
//! the command's output, never an incremental patch, so a failed call
//! leaves the previously rendered view intact; the failure itself surfaces
//! as a transient notification line.
//!
//! ## Error Handling Philosophy
//!
//! - One-shot commands report a failure once and exit non-zero; nothing is
//!   retried automatically.
//! - Inside the interactive edit session, failures (validation, save,
//!   lookup) keep the session open with the current edits intact.
//! - An ISBN lookup miss is information, not an error.
//!
//! ## Progress and User Experience
//!
//! Commands that wait on the server show an indicatif spinner while the
//! request is outstanding, then clear it before rendering. Output uses the
//! notification macros from the crate root and tabled tables for the
//! shelves and tiles.

mod add;
mod delete;
mod edit;
mod info;
mod lookup;
mod open;
mod shelf;
mod show;
mod stats;

pub use add::AddOptions;
pub use add::add;
pub use delete::delete;
pub use edit::edit;
pub use info::info;
pub use lookup::lookup;
pub use open::open;
pub use shelf::shelf;
pub use show::show;
pub use stats::stats;
