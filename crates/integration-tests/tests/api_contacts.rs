//! Integration tests for the contacts API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with a seeded `contacts` table
//! - The server running (cargo run -p rolodex-server)
//!
//! Run with: cargo test -p rolodex-integration-tests

use reqwest::{Client, StatusCode};
use serde_json::Value;

use rolodex_integration_tests::base_url;

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_health_reports_database_state() {
    let resp = Client::new()
        .get(format!("{}/api/health", base_url()))
        .send()
        .await
        .expect("health request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("health body is not JSON");
    assert!(body["status"] == "healthy" || body["status"] == "unhealthy");
    assert!(body["timestamp"].is_string());
    assert!(body["version"].is_string());
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_contact_list_shape() {
    let resp = Client::new()
        .get(format!("{}/api/contacts", base_url()))
        .send()
        .await
        .expect("list request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("list body is not JSON");
    let contacts = body["contacts"].as_array().expect("contacts is an array");
    assert_eq!(body["count"].as_u64().expect("count"), contacts.len() as u64);
    assert!(body["timestamp"].is_string());

    // Rows come back ordered by last name then first name.
    let names: Vec<(String, String)> = contacts
        .iter()
        .map(|c| {
            (
                c["last_name"].as_str().unwrap_or_default().to_string(),
                c["first_name"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_missing_contact_is_404() {
    let resp = Client::new()
        .get(format!("{}/api/contacts/999999", base_url()))
        .send()
        .await
        .expect("detail request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.expect("error body is not JSON");
    assert_eq!(body["error"], "Contact not found");
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_validate_missing_contact_is_404() {
    let resp = Client::new()
        .post(format!("{}/api/validate/999999", base_url()))
        .send()
        .await
        .expect("validate request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
