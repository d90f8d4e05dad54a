//! Integration tests for Rolodex.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and the server
//! docker compose up -d postgres_db
//! cargo run -p rolodex-server
//!
//! # Run integration tests
//! cargo test -p rolodex-integration-tests
//! ```
//!
//! Tests talk to a running server over HTTP; the base URL comes from
//! `ROLODEX_BASE_URL` (default `http://localhost:3000`).

/// Base URL for the server API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("ROLODEX_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
