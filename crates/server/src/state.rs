//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::ContactStore;
use crate::services::{RandomPicker, ReportGenerator, SmartyClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the service clients built from it at startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    store: ContactStore,
    validator: SmartyClient,
    reports: ReportGenerator,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the verification HTTP client fails to build.
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let store = ContactStore::new(&config.database);
        let validator = SmartyClient::new(&config.smarty)?;
        let reports = ReportGenerator::new(
            config.templates_dir.clone(),
            config.output_dir.clone(),
            Arc::new(RandomPicker),
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                validator,
                reports,
            }),
        })
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the contact store accessor.
    #[must_use]
    pub fn store(&self) -> &ContactStore {
        &self.inner.store
    }

    /// Get a reference to the address verification client.
    #[must_use]
    pub fn validator(&self) -> &SmartyClient {
        &self.inner.validator
    }

    /// Get a reference to the report generator.
    #[must_use]
    pub fn reports(&self) -> &ReportGenerator {
        &self.inner.reports
    }
}
