//! Report template styles.

use serde::{Deserialize, Serialize};

/// A named presentation style for the generated contact report.
///
/// The set is closed: each style maps to exactly one template file on disk.
/// "random" is not a style - it is a request-time meta-value resolved to one
/// of these before any file is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStyle {
    #[default]
    Modern,
    Dark,
    Neon,
    Retro,
}

impl TemplateStyle {
    /// Every available style, in presentation order.
    pub const ALL: [Self; 4] = [Self::Modern, Self::Dark, Self::Neon, Self::Retro];

    /// The style name as it appears in requests and file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Dark => "dark",
            Self::Neon => "neon",
            Self::Retro => "retro",
        }
    }

    /// The template file name for this style.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}_template.html", self.as_str())
    }

    /// Parse a style name exactly.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "modern" => Some(Self::Modern),
            "dark" => Some(Self::Dark),
            "neon" => Some(Self::Neon),
            "retro" => Some(Self::Retro),
            _ => None,
        }
    }

    /// Parse a style name, falling back to [`TemplateStyle::Modern`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

impl std::fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
