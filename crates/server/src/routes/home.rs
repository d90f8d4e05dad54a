//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;

use rolodex_core::TemplateStyle;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub styles: &'static [TemplateStyle],
    pub version: &'static str,
}

/// Render the landing page.
pub async fn index() -> IndexTemplate {
    IndexTemplate {
        styles: &TemplateStyle::ALL,
        version: env!("CARGO_PKG_VERSION"),
    }
}
