//! Core types for Rolodex.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod status;
pub mod style;

pub use id::*;
pub use status::{StatusDisplay, ValidationStatus};
pub use style::TemplateStyle;
