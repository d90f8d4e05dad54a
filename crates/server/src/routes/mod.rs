//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//!
//! # Contacts API
//! GET  /api/contacts           - List all contacts
//! GET  /api/contacts/{id}      - One contact by id
//! POST /api/validate           - Validate every contact's address
//! POST /api/validate/{id}      - Validate one contact's address
//!
//! # Reports
//! POST /api/generate           - Render the contact report to a file
//! GET  /download/{filename}    - Fetch a generated report
//! GET  /api/templates          - Enumerate available styles
//!
//! # System
//! GET  /api/health             - Liveness + store reachability
//! GET  /api/config             - Non-secret configuration echo
//! ```

pub mod contacts;
pub mod home;
pub mod reports;
pub mod system;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the contacts API router.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/api/contacts", get(contacts::list))
        .route("/api/contacts/{id}", get(contacts::detail))
        .route("/api/validate", post(contacts::validate_all))
        .route("/api/validate/{id}", post(contacts::validate_one))
}

/// Create the report generation/download router.
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/api/generate", post(reports::generate))
        .route("/api/templates", get(reports::templates))
        .route("/download/{filename}", get(reports::download))
}

/// Create the system router.
pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(system::health))
        .route("/api/config", get(system::config))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .merge(contact_routes())
        .merge(report_routes())
        .merge(system_routes())
}
