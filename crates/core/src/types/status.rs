//! The address validation status column.
//!
//! The `contacts.valid` column is text, but it carries several shapes: NULL,
//! three fixed sentinels, the literal `false`, a serialized JSON array of
//! match candidates from the verification service, or a string some other
//! process wrote (`valid`, `invalid`). [`ValidationStatus`] is the single
//! type that round-trips all of them and knows how each shape serializes on
//! the wire and renders in a report.

use serde::ser::{Serialize, Serializer};

/// Sentinel written when no verification credentials are configured.
pub const NOT_VALIDATED: &str = "Not Validated";
/// Sentinel written when the verification service answered with a non-200.
pub const API_ERROR: &str = "API Error";
/// Sentinel written when the verification call failed at the transport level.
pub const VALIDATION_FAILED: &str = "Validation Failed";

/// Outcome of checking a contact's address, as stored in the `valid` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Never validated - the column is NULL.
    Unchecked,
    /// No credentials configured, validation skipped.
    NotValidated,
    /// The verification service answered with a non-200 status.
    ApiError,
    /// The verification call failed before an HTTP response arrived.
    Failed,
    /// The service answered 200 with an empty candidate list.
    NoMatch,
    /// The service answered 200 with match candidates, kept verbatim.
    Verified(serde_json::Value),
    /// A value already present in the column that this service did not write
    /// (e.g. `valid` / `invalid` set by an upstream process).
    Other(String),
}

/// Display attributes derived from a status for report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub css_class: &'static str,
    pub badge_class: &'static str,
    pub text: &'static str,
}

impl ValidationStatus {
    /// Decode the status from the raw `valid` column value.
    #[must_use]
    pub fn from_column(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Unchecked;
        };
        match raw {
            NOT_VALIDATED => Self::NotValidated,
            API_ERROR => Self::ApiError,
            VALIDATION_FAILED => Self::Failed,
            "false" => Self::NoMatch,
            _ => {
                if raw.trim_start().starts_with('[')
                    && let Ok(value) = serde_json::from_str::<serde_json::Value>(raw)
                    && value.is_array()
                {
                    return Self::Verified(value);
                }
                Self::Other(raw.to_owned())
            }
        }
    }

    /// Encode the status back into the `valid` column.
    ///
    /// `None` means the column stays (or becomes) NULL.
    #[must_use]
    pub fn to_column(&self) -> Option<String> {
        match self {
            Self::Unchecked => None,
            Self::NotValidated => Some(NOT_VALIDATED.to_owned()),
            Self::ApiError => Some(API_ERROR.to_owned()),
            Self::Failed => Some(VALIDATION_FAILED.to_owned()),
            Self::NoMatch => Some("false".to_owned()),
            Self::Verified(value) => Some(value.to_string()),
            Self::Other(s) => Some(s.clone()),
        }
    }

    /// Three-way mapping used by the report renderer.
    ///
    /// Only the literal strings `valid` / `invalid` hit the affirmative arms.
    /// Everything else - including a rich [`ValidationStatus::Verified`]
    /// payload and [`ValidationStatus::NoMatch`] - renders as not-validated,
    /// matching what the status column actually guarantees.
    #[must_use]
    pub fn display(&self) -> StatusDisplay {
        match self {
            Self::Other(s) if s == "valid" => StatusDisplay {
                css_class: "valid",
                badge_class: "valid-badge",
                text: "Valid Address",
            },
            Self::Other(s) if s == "invalid" => StatusDisplay {
                css_class: "invalid",
                badge_class: "invalid-badge",
                text: "Invalid Address",
            },
            _ => StatusDisplay {
                css_class: "not-validated",
                badge_class: "not-validated-badge",
                text: "Not Validated",
            },
        }
    }
}

/// Wire shape mirrors the column shape: NULL, string sentinel, boolean
/// `false`, or the candidate array.
impl Serialize for ValidationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unchecked => serializer.serialize_none(),
            Self::NotValidated => serializer.serialize_str(NOT_VALIDATED),
            Self::ApiError => serializer.serialize_str(API_ERROR),
            Self::Failed => serializer.serialize_str(VALIDATION_FAILED),
            Self::NoMatch => serializer.serialize_bool(false),
            Self::Verified(value) => value.serialize(serializer),
            Self::Other(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_column_sentinels() {
        assert_eq!(
            ValidationStatus::from_column(None),
            ValidationStatus::Unchecked
        );
        assert_eq!(
            ValidationStatus::from_column(Some("Not Validated")),
            ValidationStatus::NotValidated
        );
        assert_eq!(
            ValidationStatus::from_column(Some("API Error")),
            ValidationStatus::ApiError
        );
        assert_eq!(
            ValidationStatus::from_column(Some("Validation Failed")),
            ValidationStatus::Failed
        );
        assert_eq!(
            ValidationStatus::from_column(Some("false")),
            ValidationStatus::NoMatch
        );
    }

    #[test]
    fn test_from_column_candidate_array() {
        let raw = r#"[{"delivery_line_1": "119 Burnet Way"}]"#;
        let status = ValidationStatus::from_column(Some(raw));
        assert_eq!(
            status,
            ValidationStatus::Verified(json!([{"delivery_line_1": "119 Burnet Way"}]))
        );
    }

    #[test]
    fn test_from_column_malformed_array_is_other() {
        let status = ValidationStatus::from_column(Some("[not json"));
        assert_eq!(status, ValidationStatus::Other("[not json".to_owned()));
    }

    #[test]
    fn test_from_column_foreign_strings() {
        assert_eq!(
            ValidationStatus::from_column(Some("valid")),
            ValidationStatus::Other("valid".to_owned())
        );
        assert_eq!(
            ValidationStatus::from_column(Some("invalid")),
            ValidationStatus::Other("invalid".to_owned())
        );
    }

    #[test]
    fn test_column_roundtrip() {
        let statuses = [
            ValidationStatus::Unchecked,
            ValidationStatus::NotValidated,
            ValidationStatus::ApiError,
            ValidationStatus::Failed,
            ValidationStatus::NoMatch,
            ValidationStatus::Verified(json!([{"candidate_index": 0}])),
            ValidationStatus::Other("valid".to_owned()),
        ];
        for status in statuses {
            let column = status.to_column();
            assert_eq!(ValidationStatus::from_column(column.as_deref()), status);
        }
    }

    #[test]
    fn test_display_mapping() {
        let valid = ValidationStatus::Other("valid".to_owned()).display();
        assert_eq!(valid.css_class, "valid");
        assert_eq!(valid.badge_class, "valid-badge");
        assert_eq!(valid.text, "Valid Address");

        let invalid = ValidationStatus::Other("invalid".to_owned()).display();
        assert_eq!(invalid.badge_class, "invalid-badge");
        assert_eq!(invalid.text, "Invalid Address");

        // Everything else, including rich verified payloads, is not-validated.
        for status in [
            ValidationStatus::Unchecked,
            ValidationStatus::NoMatch,
            ValidationStatus::Verified(json!([{"candidate_index": 0}])),
            ValidationStatus::ApiError,
        ] {
            let display = status.display();
            assert_eq!(display.css_class, "not-validated");
            assert_eq!(display.badge_class, "not-validated-badge");
            assert_eq!(display.text, "Not Validated");
        }
    }

    #[test]
    fn test_wire_shapes() {
        assert_eq!(
            serde_json::to_value(ValidationStatus::Unchecked).unwrap(),
            json!(null)
        );
        assert_eq!(
            serde_json::to_value(ValidationStatus::NoMatch).unwrap(),
            json!(false)
        );
        assert_eq!(
            serde_json::to_value(ValidationStatus::ApiError).unwrap(),
            json!("API Error")
        );
        let payload = json!([{"delivery_line_1": "119 Burnet Way"}]);
        assert_eq!(
            serde_json::to_value(ValidationStatus::Verified(payload.clone())).unwrap(),
            payload
        );
    }
}
