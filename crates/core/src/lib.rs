//! Rolodex Core - Shared types library.
//!
//! This crate provides common types used across the Rolodex components:
//! - `server` - The contact listing / address validation / report service
//! - `integration-tests` - End-to-end tests driven over HTTP
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, template styles, and the validation status column

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
