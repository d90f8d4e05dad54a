//! Health and configuration reflection handlers.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Response for the health check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: String,
    pub timestamp: String,
    pub version: &'static str,
}

/// Response for the configuration echo.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub template_style: String,
    pub templates_dir: String,
    pub output_dir: String,
    pub smarty_configured: bool,
}

/// Health check: liveness plus a store reachability probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.store().ping().await {
        Ok(()) => "healthy".to_string(),
        Err(e) => format!("error: {e}"),
    };

    Json(HealthResponse {
        status: if database == "healthy" {
            "healthy"
        } else {
            "unhealthy"
        },
        database,
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Echo the non-secret configuration.
pub async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let config = state.config();
    Json(ConfigResponse {
        template_style: config.template_style.clone(),
        templates_dir: config.templates_dir.display().to_string(),
        output_dir: config.output_dir.display().to_string(),
        smarty_configured: config.smarty.is_configured(),
    })
}
