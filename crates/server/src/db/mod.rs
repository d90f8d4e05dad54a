//! Database operations for the contacts `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `contacts` - The contact list; this service reads full rows and writes
//!   only the `valid` status column. Rows are created and owned elsewhere.
//!
//! # Connection model
//!
//! There is no pool: every store operation opens its own connection and
//! closes it before returning, so a request never holds a connection across
//! its external API calls.

pub mod contacts;

use thiserror::Error;

pub use contacts::ContactStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
