//! Report rendering and HTML file generation.
//!
//! Templates are operator-supplied Jinja files loaded from disk at render
//! time, one per [`TemplateStyle`], named `{style}_template.html`. The
//! requested style may be the meta-value "random", which resolves to one
//! concrete style through a [`StylePicker`] before any file is touched.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use minijinja::{Environment, context};
use serde::Serialize;
use thiserror::Error;
use tokio::fs;

use rolodex_core::TemplateStyle;

use crate::models::Contact;

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The template file for the resolved style does not exist.
    #[error("Template file not found: {}", path.display())]
    TemplateMissing { path: PathBuf },

    /// Template evaluation failed.
    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),

    /// Reading a template or writing the output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The output filename would escape the output directory.
    #[error("invalid output filename: {0}")]
    InvalidFilename(String),
}

/// A style-selection seam so tests can pin the "random" resolution.
pub trait StylePicker: Send + Sync {
    /// Pick one style from a non-empty slice.
    fn pick(&self, styles: &[TemplateStyle]) -> TemplateStyle;
}

/// Production picker: uniform choice from the thread-local RNG.
pub struct RandomPicker;

impl StylePicker for RandomPicker {
    fn pick(&self, styles: &[TemplateStyle]) -> TemplateStyle {
        use rand::seq::IndexedRandom;

        *styles
            .choose(&mut rand::rng())
            .unwrap_or(&TemplateStyle::Modern)
    }
}

/// A requested style: either a concrete one or "resolve at render time".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChoice {
    Random,
    Fixed(TemplateStyle),
}

impl StyleChoice {
    /// Parse a requested style name. `"random"` stays a meta-value; any
    /// unrecognized name leniently falls back to modern.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == "random" {
            Self::Random
        } else {
            Self::Fixed(TemplateStyle::from_name_or_default(name))
        }
    }

    /// Resolve to a concrete style, consulting the picker for `Random`.
    #[must_use]
    pub fn resolve(self, picker: &dyn StylePicker) -> TemplateStyle {
        match self {
            Self::Random => {
                let style = picker.pick(&TemplateStyle::ALL);
                tracing::info!(style = %style, "randomly selected template style");
                style
            }
            Self::Fixed(style) => style,
        }
    }
}

/// A contact augmented with its display attributes for template binding.
#[derive(Serialize)]
struct ReportContact<'a> {
    #[serde(flatten)]
    contact: &'a Contact,
    css_class: &'static str,
    badge_class: &'static str,
    validation_text: &'static str,
}

/// A produced report: where it landed and which concrete style was used.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub path: PathBuf,
    pub style: TemplateStyle,
}

/// Renders contact reports from the operator-supplied template directory and
/// writes them under the output directory.
pub struct ReportGenerator {
    templates_dir: PathBuf,
    output_dir: PathBuf,
    picker: Arc<dyn StylePicker>,
}

impl ReportGenerator {
    /// Create a generator over the given directories.
    #[must_use]
    pub fn new(
        templates_dir: PathBuf,
        output_dir: PathBuf,
        picker: Arc<dyn StylePicker>,
    ) -> Self {
        Self {
            templates_dir,
            output_dir,
            picker,
        }
    }

    /// Generate a report and write it to `{output_dir}/{filename}`,
    /// overwriting any previous file of the same name.
    ///
    /// Returns the final path and the concretely resolved style (never the
    /// meta-value "random").
    ///
    /// # Errors
    ///
    /// Returns `ReportError::TemplateMissing` if the resolved style has no
    /// template file, `ReportError::InvalidFilename` if the filename carries
    /// path components, and `ReportError::Io`/`ReportError::Render` for
    /// filesystem and template failures.
    pub async fn generate(
        &self,
        contacts: &[Contact],
        choice: StyleChoice,
        filename: &str,
    ) -> Result<GeneratedReport, ReportError> {
        if !is_plain_filename(filename) {
            return Err(ReportError::InvalidFilename(filename.to_owned()));
        }

        fs::create_dir_all(&self.output_dir).await?;

        let style = choice.resolve(self.picker.as_ref());
        let source = self.load_template(style).await?;
        let html = render_report(&source, contacts)?;

        let path = self.output_dir.join(filename);
        fs::write(&path, html).await?;
        tracing::info!(path = %path.display(), style = %style, "HTML report generated");

        Ok(GeneratedReport { path, style })
    }

    /// Read the template source for a concrete style.
    async fn load_template(&self, style: TemplateStyle) -> Result<String, ReportError> {
        let path = self.templates_dir.join(style.file_name());
        match fs::read_to_string(&path).await {
            Ok(source) => Ok(source),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ReportError::TemplateMissing { path })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Render a template source against the contact list and the current time.
///
/// Pure in its inputs apart from the timestamp; each contact is bound with
/// its three derived display attributes.
fn render_report(source: &str, contacts: &[Contact]) -> Result<String, ReportError> {
    let prepared: Vec<ReportContact<'_>> = contacts
        .iter()
        .map(|contact| {
            let display = contact.valid.display();
            ReportContact {
                contact,
                css_class: display.css_class,
                badge_class: display.badge_class,
                validation_text: display.text,
            }
        })
        .collect();

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let env = Environment::new();
    let template = env.template_from_str(source)?;
    let html = template.render(context! {
        contacts => prepared,
        timestamp => timestamp,
    })?;
    Ok(html)
}

/// A filename with no path components: no separators, no parent traversal.
fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && filename != "."
        && filename != ".."
}
