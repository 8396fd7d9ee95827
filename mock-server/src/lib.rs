//! In-process HubSpot API double for integration tests.
//!
//! Serves a small fixed data set behind the real paths the client targets,
//! enforces bearer auth, and counts every API request it receives so tests
//! can assert that an operation performed (or skipped) a network call.
//! The counter is readable at `GET /__mock/requests`; `/__mock` paths are
//! not counted.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

#[derive(Default)]
pub struct MockState {
    requests: AtomicU64,
}

pub fn app() -> Router {
    let state = Arc::new(MockState::default());
    Router::new()
        .route("/crm/v3/objects/contacts/search", post(search_contacts))
        .route("/crm/v3/objects/companies/search", post(search_companies))
        .route(
            "/crm/v3/objects/contacts/{id}",
            get(get_contact).patch(update_contact).delete(delete_contact),
        )
        .route(
            "/crm/v3/objects/companies/{id}",
            get(get_company).delete(delete_company),
        )
        .route(
            "/crm/v3/objects/deals/{id}",
            get(get_deal).delete(delete_deal),
        )
        .route("/contacts/v1/lists/{id}", post(update_list))
        .route("/__mock/requests", get(request_count))
        .layer(middleware::from_fn_with_state(state.clone(), observe))
        .with_state(state)
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Counts API requests and rejects unauthenticated ones.
async fn observe(State(state): State<Arc<MockState>>, request: Request, next: Next) -> Response {
    if !request.uri().path().starts_with("/__mock") {
        state.requests.fetch_add(1, Ordering::SeqCst);

        let bearer = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .unwrap_or("");
        if bearer.is_empty() {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "Unauthorized"})),
            )
                .into_response();
        }
    }
    next.run(request).await
}

async fn request_count(State(state): State<Arc<MockState>>) -> Json<Value> {
    Json(json!({ "count": state.requests.load(Ordering::SeqCst) }))
}

fn contact_seven() -> Value {
    json!({"id": "7", "properties": {"email": "a@example.com"}})
}

fn company_forty_two() -> Value {
    json!({"id": "42", "properties": {"domain": "acme.com", "name": "Acme"}})
}

fn filter_value(body: &Value) -> &str {
    body.pointer("/filterGroups/0/filters/0/value")
        .and_then(Value::as_str)
        .unwrap_or("")
}

async fn search_contacts(Json(body): Json<Value>) -> Json<Value> {
    let results = match filter_value(&body) {
        "a@example.com" => json!([contact_seven()]),
        // Two matches, for first-result-only assertions.
        "dup@example.com" => json!([
            {"id": "first", "properties": {"email": "dup@example.com"}},
            {"id": "second", "properties": {"email": "dup@example.com"}},
        ]),
        _ => json!([]),
    };
    Json(json!({ "total": results.as_array().map(Vec::len).unwrap_or(0), "results": results }))
}

async fn search_companies(Json(body): Json<Value>) -> Json<Value> {
    let results = match filter_value(&body) {
        "acme.com" => json!([company_forty_two()]),
        _ => json!([]),
    };
    Json(json!({ "total": results.as_array().map(Vec::len).unwrap_or(0), "results": results }))
}

async fn get_contact(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "7" => Json(contact_seven()).into_response(),
        // A body that is not JSON, for decode-failure assertions.
        "badjson" => (StatusCode::OK, "plainly not json").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Contact not found"})),
        )
            .into_response(),
    }
}

async fn update_contact(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    // Echo the received properties so tests can assert the body shape.
    Json(json!({ "id": id, "properties": body.get("properties").cloned().unwrap_or(Value::Null) }))
}

async fn delete_contact(Path(id): Path<String>) -> StatusCode {
    if id == "7" {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn get_company(Path(id): Path<String>) -> Response {
    if id == "42" {
        Json(company_forty_two()).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Company not found"})),
        )
            .into_response()
    }
}

async fn delete_company(Path(id): Path<String>) -> StatusCode {
    if id == "42" {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn get_deal(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "9" => Json(json!({"id": "9", "properties": {"dealname": "Big deal"}})).into_response(),
        "classified" => (
            StatusCode::FORBIDDEN,
            Json(json!({"message": "Forbidden"})),
        )
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Deal not found"})),
        )
            .into_response(),
    }
}

async fn delete_deal(Path(id): Path<String>) -> StatusCode {
    if id == "9" {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn update_list(Path(id): Path<String>, Json(_body): Json<Value>) -> Response {
    match id.as_str() {
        // Created rather than OK, for range-rule assertions.
        "1" => (StatusCode::CREATED, Json(json!({"listId": 1}))).into_response(),
        "bad" => (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Invalid list definition"})),
        )
            .into_response(),
        _ => Json(json!({"listId": id})).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_contact_matches_search_fixture() {
        let contact = contact_seven();
        assert_eq!(contact["id"], "7");
        assert_eq!(contact["properties"]["email"], "a@example.com");
    }

    #[test]
    fn filter_value_reads_first_filter() {
        let body = json!({
            "filterGroups": [{"filters": [{"propertyName": "email", "operator": "EQ", "value": "x@y.z"}]}],
            "limit": 1,
        });
        assert_eq!(filter_value(&body), "x@y.z");
        assert_eq!(filter_value(&json!({})), "");
    }

    #[test]
    fn counter_starts_at_zero() {
        let state = MockState::default();
        assert_eq!(state.requests.load(Ordering::SeqCst), 0);
    }
}
