//! End-to-end tests against the live mock server.
//!
//! Each test starts its own server on a random port so the request counter
//! observes exactly one test's traffic, then drives public operations over
//! real HTTP.

use hubspot_core::client::{Builder, Client, Credentials};
use hubspot_core::envelope::{Envelope, Outcome};
use serde_json::{json, Value};

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str, token: &str) -> Client {
    Builder::new()
        .credentials(Credentials::new(base_url, token))
        .build()
        .unwrap()
}

async fn requests_seen(base_url: &str) -> u64 {
    let count: Value = reqwest::get(format!("{base_url}/__mock/requests"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    count["count"].as_u64().unwrap()
}

#[tokio::test]
async fn contact_load_by_email_unwraps_first_result() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    let envelope = hub.contacts().load_by_email("a@example.com").await;
    assert_eq!(
        envelope,
        Envelope {
            status: 200,
            error: None,
            payload: json!({"id": "7", "properties": {"email": "a@example.com"}}),
        }
    );
}

#[tokio::test]
async fn contact_load_by_email_miss_is_null_payload() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    let envelope = hub.contacts().load_by_email("nobody@example.com").await;
    assert_eq!(envelope.status, 200);
    assert!(envelope.error.is_none());
    assert!(envelope.payload.is_null());
    assert_eq!(envelope.outcome(), Outcome::Missing);
}

#[tokio::test]
async fn search_unwrap_returns_first_of_many() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    let envelope = hub.contacts().load_by_email("dup@example.com").await;
    assert_eq!(envelope.payload["id"], "first");
}

#[tokio::test]
async fn company_delete_with_missing_domain_skips_the_delete_call() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    assert!(!hub.companies().delete("missing.com").await);
    // Only the lookup went out; no DELETE was attempted.
    assert_eq!(requests_seen(&base).await, 1);
}

#[tokio::test]
async fn company_delete_with_known_domain_deletes() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    assert!(hub.companies().delete("acme.com").await);
    assert_eq!(requests_seen(&base).await, 2);
}

#[tokio::test]
async fn contact_delete_follows_lookup_then_delete() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    assert!(hub.contacts().delete("a@example.com").await);
    assert!(!hub.contacts().delete("nobody@example.com").await);
}

#[tokio::test]
async fn deal_delete_is_exact_204() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    assert!(hub.deals().delete("9").await);
    assert!(!hub.deals().delete("777").await);
}

#[tokio::test]
async fn list_update_uses_the_range_rule() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    // 201 passes the "< 300" rule; 400 fails it.
    assert!(hub.lists().update("1", json!({"name": "New list"})).await);
    assert!(!hub.lists().update("bad", json!({"name": "New list"})).await);
}

#[tokio::test]
async fn remote_error_message_lands_in_the_envelope() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    let envelope = hub.deals().load_by_id("classified").await;
    assert_eq!(envelope.status, 403);
    assert_eq!(envelope.error.as_deref(), Some("Forbidden"));
    assert_eq!(envelope.payload, json!({"message": "Forbidden"}));
}

#[tokio::test]
async fn not_found_passes_status_and_body_through() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    let envelope = hub.companies().load_by_id("77").await;
    assert_eq!(envelope.status, 404);
    assert_eq!(envelope.error.as_deref(), Some("Company not found"));
    assert_eq!(envelope.payload, json!({"message": "Company not found"}));
}

#[tokio::test]
async fn repeated_reads_are_idempotent() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    let first = hub.companies().load_by_id("42").await;
    let second = hub.companies().load_by_id("42").await;
    assert_eq!(first, second);
    assert_eq!(first.status, 200);
}

#[tokio::test]
async fn missing_token_fails_without_any_network_call() {
    let base = start_server().await;
    let hub = client(&base, "");

    let envelope = hub.contacts().load_by_id("7").await;
    assert_eq!(envelope.status, 500);
    assert_eq!(
        envelope.error.as_deref(),
        Some("Missing HubSpot access token in configuration.")
    );
    // The operation's declared empty shape still applies on failure.
    assert_eq!(envelope.payload, json!([]));
    assert_eq!(requests_seen(&base).await, 0);
}

#[tokio::test]
async fn contact_update_patches_a_properties_body() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    let envelope = hub
        .contacts()
        .update(json!({"id": "7", "firstname": "Ada"}))
        .await;
    assert_eq!(envelope.status, 200);
    // The mock echoes what it received on the PATCH.
    assert_eq!(envelope.payload["id"], "7");
    assert_eq!(
        envelope.payload["properties"],
        json!({"id": "7", "firstname": "Ada"})
    );
}

#[tokio::test]
async fn undecodable_body_keeps_status_and_defaults_payload() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    let envelope = hub.contacts().load_by_id("badjson").await;
    assert_eq!(envelope.status, 200);
    assert!(envelope.error.is_none());
    assert_eq!(envelope.payload, json!([]));
}

#[tokio::test]
async fn concurrent_operations_share_one_client() {
    let base = start_server().await;
    let hub = client(&base, "test-token");

    let companies = hub.companies();
    let contacts = hub.contacts();
    let (a, b) = tokio::join!(
        companies.load_by_id("42"),
        contacts.load_by_email("a@example.com"),
    );
    assert_eq!(a.status, 200);
    assert_eq!(b.status, 200);
}
