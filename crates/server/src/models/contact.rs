//! Contact domain type.

use serde::Serialize;

use rolodex_core::{ContactId, ValidationStatus};

/// A person record with a postal address and a validation status.
///
/// Contacts are created and owned by the external store; this service reads
/// full rows and writes back only the `valid` column.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    /// Store-assigned unique ID.
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    /// Free-text street address.
    pub address: String,
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    pub zipcode: String,
    pub country: String,
    /// Address validation outcome; serializes in the column's own shapes
    /// (null / sentinel string / `false` / candidate array).
    pub valid: ValidationStatus,
}

impl Contact {
    /// Display name used in log lines.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
