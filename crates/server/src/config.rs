//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults match a local docker-compose setup.
//!
//! - `DB_HOST` - `PostgreSQL` host (default: `postgres_db`)
//! - `DB_PORT` - `PostgreSQL` port (default: 5432)
//! - `POSTGRES_DB` - Database name (default: postgres)
//! - `DB_USERNAME` - Database user (default: postgres)
//! - `POSTGRES_PASSWORD` - Database password
//! - `SMARTY_AUTH_ID` - `SmartyStreets` auth id
//! - `SMARTY_AUTH_TOKEN` - `SmartyStreets` auth token
//! - `TEMPLATE_STYLE` - Default report style (default: random)
//! - `TEMPLATES_DIR` - Report template directory (default: templates)
//! - `OUTPUT_DIR` - Generated report directory (default: static/generated)
//! - `ROLODEX_HOST` - Bind address (default: 0.0.0.0)
//! - `ROLODEX_PORT` - Listen port (default: 3000)
//! - `ROLODEX_DEBUG` - Debug logging default (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration, loaded once at startup and passed into every
/// component constructor.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PostgreSQL` connection settings
    pub database: DatabaseConfig,
    /// `SmartyStreets` address verification credentials
    pub smarty: SmartyConfig,
    /// Default report style, as configured (may be the meta-value "random")
    pub template_style: String,
    /// Directory holding the report template files
    pub templates_dir: PathBuf,
    /// Directory generated reports are written to
    pub output_dir: PathBuf,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Debug flag, widens the default log filter
    pub debug: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// `PostgreSQL` connection settings.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: Option<SecretString>,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// `SmartyStreets` API credentials.
///
/// Validation is skipped entirely unless both halves are present.
/// Implements `Debug` manually to redact the token.
#[derive(Clone, Default)]
pub struct SmartyConfig {
    pub auth_id: Option<String>,
    pub auth_token: Option<SecretString>,
}

impl SmartyConfig {
    /// Whether both credential halves are configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.auth_id.is_some() && self.auth_token.is_some()
    }
}

impl std::fmt::Debug for SmartyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartyConfig")
            .field("auth_id", &self.auth_id)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ROLODEX_HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ROLODEX_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ROLODEX_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ROLODEX_PORT".to_string(), e.to_string()))?;
        let debug = parse_bool(&get_env_or_default("ROLODEX_DEBUG", "false"));

        Ok(Self {
            database: DatabaseConfig::from_env()?,
            smarty: SmartyConfig::from_env(),
            template_style: get_env_or_default("TEMPLATE_STYLE", "random"),
            templates_dir: PathBuf::from(get_env_or_default("TEMPLATES_DIR", "templates")),
            output_dir: PathBuf::from(get_env_or_default("OUTPUT_DIR", "static/generated")),
            host,
            port,
            debug,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let port = get_env_or_default("DB_PORT", "5432")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("DB_PORT".to_string(), e.to_string()))?;

        Ok(Self {
            host: get_env_or_default("DB_HOST", "postgres_db"),
            port,
            name: get_env_or_default("POSTGRES_DB", "postgres"),
            username: get_env_or_default("DB_USERNAME", "postgres"),
            password: get_optional_env("POSTGRES_PASSWORD").map(SecretString::from),
        })
    }
}

impl SmartyConfig {
    fn from_env() -> Self {
        Self {
            auth_id: get_optional_env("SMARTY_AUTH_ID"),
            auth_token: get_optional_env("SMARTY_AUTH_TOKEN").map(SecretString::from),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a boolean flag the permissive way ("1" and "true" count, any case).
fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("1"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool(""));
        assert!(!parse_bool("yes"));
    }

    #[test]
    fn test_smarty_configured_requires_both_halves() {
        let neither = SmartyConfig::default();
        assert!(!neither.is_configured());

        let id_only = SmartyConfig {
            auth_id: Some("id".to_string()),
            auth_token: None,
        };
        assert!(!id_only.is_configured());

        let token_only = SmartyConfig {
            auth_id: None,
            auth_token: Some(SecretString::from("token")),
        };
        assert!(!token_only.is_configured());

        let both = SmartyConfig {
            auth_id: Some("id".to_string()),
            auth_token: Some(SecretString::from("token")),
        };
        assert!(both.is_configured());
    }

    #[test]
    fn test_database_config_debug_redacts_password() {
        let config = DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            name: "contacts".to_string(),
            username: "app".to_string(),
            password: Some(SecretString::from("super_secret_password")),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("localhost"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_password"));
    }

    #[test]
    fn test_smarty_config_debug_redacts_token() {
        let config = SmartyConfig {
            auth_id: Some("auth_id_value".to_string()),
            auth_token: Some(SecretString::from("super_secret_token")),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("auth_id_value"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token"));
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 5432,
                name: "postgres".to_string(),
                username: "postgres".to_string(),
                password: None,
            },
            smarty: SmartyConfig::default(),
            template_style: "random".to_string(),
            templates_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("static/generated"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            debug: false,
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
