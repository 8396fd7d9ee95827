//! The uniform result shape returned by every non-boolean operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized result of one API operation.
///
/// `error` is `Some` if and only if the call did not fully succeed.
/// `payload` is always structurally present: on failure it carries the
/// decoded error body when the remote returned valid JSON, and otherwise
/// falls back to the operation's declared empty shape (`null` or `[]`).
///
/// Transport-level failures (missing token, DNS, connection, timeout) are
/// reported with the synthetic status `500` rather than an `Err`; the
/// envelope is the error channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// HTTP status code, or 500 for pre-flight and transport failures.
    pub status: u16,
    /// Human-readable failure description; `None` on success.
    pub error: Option<String>,
    /// Decoded response body, shaped per operation.
    pub payload: Value,
}

/// Tagged view of an [`Envelope`] separating "no record" from "request
/// failed", which the wire shape conflates.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The request succeeded and produced a value.
    Success(Value),
    /// The request succeeded but no matching record exists.
    Missing,
    /// The request failed locally or remotely.
    Failed {
        /// Status carried by the envelope (500 for local failures).
        status: u16,
        /// The envelope's error text.
        message: String,
    },
}

impl Envelope {
    /// True when the call fully succeeded.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Classifies this envelope without changing the wire shape.
    ///
    /// A successful envelope with a `null` payload (a search-and-unwrap
    /// miss) maps to [`Outcome::Missing`]; empty collections are still
    /// [`Outcome::Success`].
    pub fn outcome(&self) -> Outcome {
        match &self.error {
            Some(message) => Outcome::Failed {
                status: self.status,
                message: message.clone(),
            },
            None if self.payload.is_null() => Outcome::Missing,
            None => Outcome::Success(self.payload.clone()),
        }
    }

    /// Locally synthesized transport or pre-flight failure.
    pub(crate) fn fault(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            error: Some(message.into()),
            payload: Value::Null,
        }
    }

    /// Locally synthesized 400 for a failed parameter presence check.
    pub(crate) fn rejected(message: &str, payload: Value) -> Self {
        Self {
            status: 400,
            error: Some(message.to_string()),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_has_no_error() {
        let envelope = Envelope {
            status: 200,
            error: None,
            payload: json!({"id": "1"}),
        };
        assert!(envelope.is_success());
        assert_eq!(envelope.outcome(), Outcome::Success(json!({"id": "1"})));
    }

    #[test]
    fn null_payload_without_error_is_missing() {
        let envelope = Envelope {
            status: 200,
            error: None,
            payload: Value::Null,
        };
        assert_eq!(envelope.outcome(), Outcome::Missing);
    }

    #[test]
    fn empty_collection_is_still_success() {
        let envelope = Envelope {
            status: 200,
            error: None,
            payload: json!([]),
        };
        assert_eq!(envelope.outcome(), Outcome::Success(json!([])));
    }

    #[test]
    fn failed_outcome_carries_status_and_message() {
        let envelope = Envelope {
            status: 403,
            error: Some("Forbidden".to_string()),
            payload: json!({"message": "Forbidden"}),
        };
        assert_eq!(
            envelope.outcome(),
            Outcome::Failed {
                status: 403,
                message: "Forbidden".to_string(),
            }
        );
    }

    #[test]
    fn fault_is_synthetic_500() {
        let envelope = Envelope::fault("no route to host");
        assert_eq!(envelope.status, 500);
        assert_eq!(envelope.error.as_deref(), Some("no route to host"));
        assert!(envelope.payload.is_null());
    }

    #[test]
    fn envelope_serializes_wire_shape() {
        let envelope = Envelope {
            status: 200,
            error: None,
            payload: json!({"id": "7"}),
        };
        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            wire,
            json!({"status": 200, "error": null, "payload": {"id": "7"}})
        );
    }
}
