//! Contact listing and address validation handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Serialize;

use rolodex_core::{ContactId, ValidationStatus};

use crate::error::{AppError, Result};
use crate::models::Contact;
use crate::state::AppState;

/// Response for the contact list.
#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub contacts: Vec<Contact>,
    pub count: usize,
    pub timestamp: String,
}

/// Response for validating every contact.
#[derive(Debug, Serialize)]
pub struct ValidateAllResponse {
    pub message: &'static str,
    pub contacts: Vec<Contact>,
    pub count: usize,
}

/// Response for validating one contact.
#[derive(Debug, Serialize)]
pub struct ValidateOneResponse {
    pub message: &'static str,
    pub contact: Contact,
}

/// List all contacts.
pub async fn list(State(state): State<AppState>) -> Result<Json<ContactListResponse>> {
    let contacts = state.store().fetch_all().await?;
    Ok(Json(ContactListResponse {
        count: contacts.len(),
        contacts,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Get one contact by id.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<ContactId>,
) -> Result<Json<Contact>> {
    let contacts = state.store().fetch_all().await?;
    contacts
        .into_iter()
        .find(|c| c.id == id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
}

/// Validate every contact's address, in store order.
///
/// Each contact is verified and its status persisted before the next one is
/// touched; a store failure partway aborts the request, and updates already
/// written stay committed. Validator failures never abort - they degrade into
/// sentinel statuses.
pub async fn validate_all(State(state): State<AppState>) -> Result<Json<ValidateAllResponse>> {
    let mut contacts = state.store().fetch_all().await?;
    if contacts.is_empty() {
        return Err(AppError::NotFound("No contacts found".to_string()));
    }

    for contact in &mut contacts {
        contact.valid = validate_and_persist(&state, contact).await?;
    }

    Ok(Json(ValidateAllResponse {
        message: "Address validation completed",
        count: contacts.len(),
        contacts,
    }))
}

/// Validate one contact's address by id.
pub async fn validate_one(
    State(state): State<AppState>,
    Path(id): Path<ContactId>,
) -> Result<Json<ValidateOneResponse>> {
    let contacts = state.store().fetch_all().await?;
    let mut contact = contacts
        .into_iter()
        .find(|c| c.id == id)
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    contact.valid = validate_and_persist(&state, &contact).await?;

    Ok(Json(ValidateOneResponse {
        message: "Address validation completed",
        contact,
    }))
}

/// Verify one contact's address and persist the outcome.
async fn validate_and_persist(state: &AppState, contact: &Contact) -> Result<ValidationStatus> {
    let status = state
        .validator()
        .verify(&contact.address, &contact.city, &contact.state, &contact.zipcode)
        .await;

    state.store().update_validation(contact.id, &status).await?;

    tracing::info!(
        contact = %contact.full_name(),
        status = ?status,
        "validated address"
    );

    Ok(status)
}
