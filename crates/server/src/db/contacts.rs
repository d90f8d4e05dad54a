//! Contact store accessor.
//!
//! Each operation opens a fresh connection from the configured options, runs
//! a single statement, and closes the connection on every path. Failures map
//! to [`RepositoryError`] and are fatal to the enclosing request; there is no
//! partial-result or retry path.

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Connection, Row};

use rolodex_core::{ContactId, ValidationStatus};

use super::RepositoryError;
use crate::config::DatabaseConfig;
use crate::models::Contact;

/// Row shape returned by the contact list query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactRow {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub valid: Option<String>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            address: row.address,
            city: row.city,
            state: row.state,
            zipcode: row.zipcode,
            country: row.country,
            valid: ValidationStatus::from_column(row.valid.as_deref()),
        }
    }
}

/// Store accessor for the `contacts` table.
///
/// No `Debug` impl: the connect options carry the database password.
#[derive(Clone)]
pub struct ContactStore {
    options: PgConnectOptions,
}

impl ContactStore {
    /// Build a store accessor from database configuration.
    #[must_use]
    pub fn new(config: &DatabaseConfig) -> Self {
        use secrecy::ExposeSecret;

        let mut options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.name)
            .username(&config.username);
        if let Some(password) = &config.password {
            options = options.password(password.expose_secret());
        }

        Self { options }
    }

    /// Open a fresh connection.
    async fn connect(&self) -> Result<PgConnection, RepositoryError> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "database connection failed");
                RepositoryError::Connect(e)
            })
    }

    /// Fetch every contact, ordered by last name then first name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the connection or query fails.
    pub async fn fetch_all(&self) -> Result<Vec<Contact>, RepositoryError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, ContactRow>(
            r"
            SELECT id, first_name, last_name, address, city, state, zipcode, country, valid
            FROM contacts
            ORDER BY last_name, first_name
            ",
        )
        .fetch_all(&mut conn)
        .await;
        // close() sends a graceful Terminate; Drop would just sever the socket.
        let _ = conn.close().await;

        let rows = result?;
        tracing::info!(count = rows.len(), "fetched contacts");
        Ok(rows.into_iter().map(Contact::from).collect())
    }

    /// Persist a contact's validation status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the connection or update fails.
    pub async fn update_validation(
        &self,
        id: ContactId,
        status: &ValidationStatus,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("UPDATE contacts SET valid = $1 WHERE id = $2")
            .bind(status.to_column())
            .bind(id)
            .execute(&mut conn)
            .await;
        let _ = conn.close().await;

        result?;
        Ok(())
    }

    /// Probe store reachability for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the connection or probe query fails.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("SELECT 1").fetch_one(&mut conn).await;
        let _ = conn.close().await;

        let row = result?;
        let _: i32 = row.try_get(0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use serde_json::json;

    fn config() -> DatabaseConfig {
        DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            name: "contacts".to_string(),
            username: "app".to_string(),
            password: Some(SecretString::from("pw")),
        }
    }

    #[test]
    fn test_row_to_contact_decodes_status() {
        let row = ContactRow {
            id: ContactId::new(1),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            address: "119 Burnet Way".to_string(),
            city: "Charlottesville".to_string(),
            state: "VA".to_string(),
            zipcode: "22902".to_string(),
            country: "USA".to_string(),
            valid: Some(r#"[{"candidate_index": 0}]"#.to_string()),
        };

        let contact = Contact::from(row);
        assert_eq!(
            contact.valid,
            ValidationStatus::Verified(json!([{"candidate_index": 0}]))
        );
        assert_eq!(contact.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_row_with_null_status_is_unchecked() {
        let row = ContactRow {
            id: ContactId::new(2),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            address: "1 Navy Way".to_string(),
            city: "Arlington".to_string(),
            state: "VA".to_string(),
            zipcode: "22202".to_string(),
            country: "USA".to_string(),
            valid: None,
        };

        assert_eq!(Contact::from(row).valid, ValidationStatus::Unchecked);
    }

    #[test]
    fn test_store_construction() {
        // Only checks that options assemble; no connection is attempted.
        let _store = ContactStore::new(&config());
    }
}
