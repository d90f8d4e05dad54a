//! Report generation, style enumeration, and download handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use rolodex_core::TemplateStyle;

use crate::error::{AppError, Result};
use crate::services::StyleChoice;
use crate::state::AppState;

/// Request body for report generation. Both fields are optional; the body
/// itself may be absent entirely.
#[derive(Debug, Deserialize, Default)]
pub struct GenerateRequest {
    pub template_style: Option<String>,
    pub output_filename: Option<String>,
}

/// Response for report generation.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub message: &'static str,
    pub output_path: String,
    pub template_style: TemplateStyle,
    pub contacts_count: usize,
    pub download_url: String,
}

/// Response for the style enumeration.
#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub template_styles: Vec<&'static str>,
    #[serde(rename = "default")]
    pub default_style: String,
}

/// Render the contact report and write it to the output directory.
///
/// Defaults: the configured style (which may be "random") and `index.html`.
pub async fn generate(
    State(state): State<AppState>,
    body: Option<Json<GenerateRequest>>,
) -> Result<Json<GenerateResponse>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let style = request
        .template_style
        .unwrap_or_else(|| state.config().template_style.clone());
    let filename = request
        .output_filename
        .unwrap_or_else(|| "index.html".to_string());

    let contacts = state.store().fetch_all().await?;
    if contacts.is_empty() {
        return Err(AppError::NotFound("No contacts found".to_string()));
    }

    let report = state
        .reports()
        .generate(&contacts, StyleChoice::parse(&style), &filename)
        .await?;

    Ok(Json(GenerateResponse {
        message: "HTML file generated successfully",
        output_path: report.path.display().to_string(),
        template_style: report.style,
        contacts_count: contacts.len(),
        download_url: format!("/download/{filename}"),
    }))
}

/// Enumerate the available template styles.
pub async fn templates(State(state): State<AppState>) -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        template_styles: TemplateStyle::ALL.iter().map(|s| s.as_str()).collect(),
        default_style: state.config().template_style.clone(),
    })
}

/// Fetch a generated report from the output directory.
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse> {
    // Only plain filenames resolve; anything with path components is absent
    // as far as this endpoint is concerned.
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
    {
        return Err(AppError::NotFound("File not found".to_string()));
    }

    let path = state.config().output_dir.join(&filename);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound("File not found".to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        bytes,
    ))
}
