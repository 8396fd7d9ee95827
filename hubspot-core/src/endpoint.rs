//! Declarative endpoint descriptors and the dispatcher over them.
//!
//! Each public operation is a data entry: HTTP verb, path template, and a
//! result-shaping rule. Adding an endpoint means adding a descriptor and a
//! thin typed method, not new request/response plumbing.

use serde_json::{json, Value};

use crate::client::Client;
use crate::envelope::Envelope;

/// HTTP verb an endpoint uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    pub(crate) fn method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }

    /// Only write verbs carry a JSON body.
    pub(crate) fn sends_body(self) -> bool {
        matches!(self, Verb::Post | Verb::Put | Verb::Patch)
    }
}

/// How an endpoint's raw envelope payload is shaped before it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// Pass the payload through; empty default is `null`.
    Object,
    /// Pass the payload through; empty default is `[]`.
    List,
    /// Unwrap the body's `results` array; empty default is `[]`.
    Results,
    /// Unwrap the first element of `results`; empty default is `null`.
    First,
}

impl Shape {
    fn apply(self, envelope: Envelope) -> Envelope {
        let Envelope {
            status,
            error,
            payload,
        } = envelope;
        let payload = match self {
            Shape::Object => payload,
            Shape::List => {
                if payload.is_null() {
                    json!([])
                } else {
                    payload
                }
            }
            Shape::Results => payload
                .get("results")
                .cloned()
                .unwrap_or_else(|| json!([])),
            Shape::First => payload
                .get("results")
                .and_then(|results| results.get(0))
                .cloned()
                .unwrap_or(Value::Null),
        };
        Envelope {
            status,
            error,
            payload,
        }
    }
}

/// Success criterion for boolean-shaped operations.
///
/// The remote uses both conventions depending on the endpoint family; the
/// criterion is declared per operation and deliberately not unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SuccessRule {
    /// Succeeds only on 204 No Content.
    NoContent,
    /// Succeeds on any status below 300.
    Under300,
}

impl SuccessRule {
    fn passes(self, status: u16) -> bool {
        match self {
            SuccessRule::NoContent => status == 204,
            SuccessRule::Under300 => status < 300,
        }
    }
}

/// One envelope-returning operation as data.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint {
    pub(crate) verb: Verb,
    pub(crate) path: &'static str,
    pub(crate) shape: Shape,
}

impl Endpoint {
    pub(crate) const fn get(path: &'static str, shape: Shape) -> Self {
        Self {
            verb: Verb::Get,
            path,
            shape,
        }
    }

    pub(crate) const fn post(path: &'static str, shape: Shape) -> Self {
        Self {
            verb: Verb::Post,
            path,
            shape,
        }
    }

    pub(crate) const fn put(path: &'static str, shape: Shape) -> Self {
        Self {
            verb: Verb::Put,
            path,
            shape,
        }
    }

    pub(crate) const fn patch(path: &'static str, shape: Shape) -> Self {
        Self {
            verb: Verb::Patch,
            path,
            shape,
        }
    }

    pub(crate) const fn delete(path: &'static str, shape: Shape) -> Self {
        Self {
            verb: Verb::Delete,
            path,
            shape,
        }
    }
}

/// One boolean-returning operation as data.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlagEndpoint {
    pub(crate) verb: Verb,
    pub(crate) path: &'static str,
    pub(crate) rule: SuccessRule,
}

impl FlagEndpoint {
    pub(crate) const fn post(path: &'static str, rule: SuccessRule) -> Self {
        Self {
            verb: Verb::Post,
            path,
            rule,
        }
    }

    pub(crate) const fn put(path: &'static str, rule: SuccessRule) -> Self {
        Self {
            verb: Verb::Put,
            path,
            rule,
        }
    }

    pub(crate) const fn patch(path: &'static str, rule: SuccessRule) -> Self {
        Self {
            verb: Verb::Patch,
            path,
            rule,
        }
    }

    pub(crate) const fn delete(path: &'static str, rule: SuccessRule) -> Self {
        Self {
            verb: Verb::Delete,
            path,
            rule,
        }
    }
}

/// Substitutes `{name}` placeholders with percent-encoded values.
pub(crate) fn render(template: &str, params: &[(&str, &str)]) -> String {
    let mut path = template.to_string();
    for (name, value) in params {
        let placeholder = format!("{{{name}}}");
        path = path.replace(&placeholder, &urlencoding::encode(value));
    }
    debug_assert!(
        !path.contains('{'),
        "unresolved placeholder in path template {template}"
    );
    path
}

/// Wraps CRM object fields for create/update bodies.
pub(crate) fn properties(data: Value) -> Value {
    json!({ "properties": data })
}

/// CRM v3 search body from caller-supplied filter groups.
pub(crate) fn search_body(filter_groups: Value, limit: u32, after: u32) -> Value {
    json!({
        "filterGroups": filter_groups,
        "limit": limit,
        "after": after,
    })
}

/// Search body with a single equality filter and `limit: 1`, used by the
/// load-by-unique-key operations.
pub(crate) fn single_filter_search(property: &str, value: &str) -> Value {
    json!({
        "filterGroups": [{
            "filters": [{
                "propertyName": property,
                "operator": "EQ",
                "value": value,
            }],
        }],
        "limit": 1,
    })
}

/// Pulls an object identifier out of a JSON payload's `id` field.
///
/// Accepts string or numeric ids; empty strings count as absent.
pub(crate) fn object_id(payload: &Value) -> Option<String> {
    match payload.get("id") {
        Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}

impl Client {
    /// Resolves an endpoint descriptor, executes it, and shapes the result.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub(crate) async fn dispatch(
        &self,
        endpoint: &Endpoint,
        params: &[(&str, &str)],
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Envelope {
        let path = render(endpoint.path, params);
        let envelope = self
            .request(endpoint.verb, &path, query, body.as_ref(), &[])
            .await;
        endpoint.shape.apply(envelope)
    }

    /// Executes a boolean-shaped endpoint and applies its success rule.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub(crate) async fn dispatch_flag(
        &self,
        endpoint: &FlagEndpoint,
        params: &[(&str, &str)],
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> bool {
        let path = render(endpoint.path, params);
        let envelope = self
            .request(endpoint.verb, &path, query, body.as_ref(), &[])
            .await;
        endpoint.rule.passes(envelope.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_placeholders() {
        let path = render(
            "/crm/v3/objects/contacts/{id}/associations/companies/{companyId}",
            &[("id", "7"), ("companyId", "42")],
        );
        assert_eq!(path, "/crm/v3/objects/contacts/7/associations/companies/42");
    }

    #[test]
    fn render_percent_encodes_values() {
        let path = render(
            "/automation/v2/workflows/{workflowId}/enrollments/contacts/{email}",
            &[("workflowId", "3"), ("email", "a+b@example.com")],
        );
        assert_eq!(
            path,
            "/automation/v2/workflows/3/enrollments/contacts/a%2Bb%40example.com"
        );
    }

    #[test]
    fn properties_wraps_fields() {
        let body = properties(json!({"id": "1", "foo": "bar"}));
        assert_eq!(body, json!({"properties": {"id": "1", "foo": "bar"}}));
    }

    #[test]
    fn single_filter_search_matches_remote_convention() {
        let body = single_filter_search("email", "a@example.com");
        assert_eq!(
            body,
            json!({
                "filterGroups": [{
                    "filters": [{
                        "propertyName": "email",
                        "operator": "EQ",
                        "value": "a@example.com",
                    }],
                }],
                "limit": 1,
            })
        );
    }

    #[test]
    fn search_body_forwards_pagination() {
        let body = search_body(json!([]), 20, 40);
        assert_eq!(body, json!({"filterGroups": [], "limit": 20, "after": 40}));
    }

    #[test]
    fn results_shape_unwraps_results() {
        let shaped = Shape::Results.apply(Envelope {
            status: 200,
            error: None,
            payload: json!({"results": [{"id": "1"}], "total": 1}),
        });
        assert_eq!(shaped.payload, json!([{"id": "1"}]));
    }

    #[test]
    fn results_shape_defaults_to_empty_list() {
        let shaped = Shape::Results.apply(Envelope {
            status: 200,
            error: None,
            payload: Value::Null,
        });
        assert_eq!(shaped.payload, json!([]));
    }

    #[test]
    fn first_shape_takes_first_result_only() {
        let shaped = Shape::First.apply(Envelope {
            status: 200,
            error: None,
            payload: json!({"results": [{"id": "a"}, {"id": "b"}]}),
        });
        assert_eq!(shaped.payload, json!({"id": "a"}));
    }

    #[test]
    fn first_shape_defaults_to_null_on_empty_results() {
        let shaped = Shape::First.apply(Envelope {
            status: 200,
            error: None,
            payload: json!({"results": []}),
        });
        assert!(shaped.payload.is_null());
    }

    #[test]
    fn list_shape_defaults_null_to_empty_list() {
        let shaped = Shape::List.apply(Envelope {
            status: 500,
            error: Some("transport".to_string()),
            payload: Value::Null,
        });
        assert_eq!(shaped.payload, json!([]));
        assert_eq!(shaped.status, 500);
    }

    #[test]
    fn success_rules_are_distinct() {
        assert!(SuccessRule::NoContent.passes(204));
        assert!(!SuccessRule::NoContent.passes(200));
        assert!(!SuccessRule::NoContent.passes(404));
        assert!(SuccessRule::Under300.passes(201));
        assert!(SuccessRule::Under300.passes(204));
        assert!(!SuccessRule::Under300.passes(400));
    }

    #[test]
    fn object_id_accepts_string_and_number() {
        assert_eq!(object_id(&json!({"id": "42"})).as_deref(), Some("42"));
        assert_eq!(object_id(&json!({"id": 42})).as_deref(), Some("42"));
        assert_eq!(object_id(&json!({"id": ""})), None);
        assert_eq!(object_id(&json!({})), None);
        assert_eq!(object_id(&Value::Null), None);
    }
}
