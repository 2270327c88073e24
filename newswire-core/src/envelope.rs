//! The uniform response envelope returned by every route

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope wrapping every proxy outcome
///
/// Exactly one of `data`/`error` is populated, determined by `success`.
/// `status` is only ever 200 or 500: upstream failures are normalized to
/// 500 regardless of the status the upstream actually returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// HTTP status the route mirrors back to the client
    pub status: u16,
    pub success: bool,
    pub message: String,
    /// Upstream payload with its article list replaced by the filtered list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Upstream error body when one was received, else a message string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl Envelope {
    /// Success envelope carrying the filtered upstream payload
    pub fn ok(data: Value) -> Self {
        Self {
            status: 200,
            success: true,
            message: "Successfully fetched the data".to_string(),
            data: Some(data),
            error: None,
        }
    }

    /// Failure envelope; `detail` is either the upstream's error body or a
    /// plain description string
    pub fn failure(detail: Value) -> Self {
        Self {
            status: 500,
            success: false,
            message: "Failed to fetch data from the API".to_string(),
            data: None,
            error: Some(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_envelope_carries_data_only() {
        let envelope = Envelope::ok(json!({"articles": []}));
        assert_eq!(envelope.status, 200);
        assert!(envelope.success);
        assert_eq!(envelope.message, "Successfully fetched the data");
        assert!(envelope.data.is_some());
        assert!(envelope.error.is_none());
    }

    #[test]
    fn failure_envelope_carries_error_only() {
        let envelope = Envelope::failure(json!({"code": "apiKeyInvalid"}));
        assert_eq!(envelope.status, 500);
        assert!(!envelope.success);
        assert_eq!(envelope.message, "Failed to fetch data from the API");
        assert!(envelope.data.is_none());
        assert!(envelope.error.is_some());
    }

    #[test]
    fn failure_accepts_plain_string_detail() {
        let envelope = Envelope::failure(Value::String("connection refused".to_string()));
        assert_eq!(envelope.error, Some(json!("connection refused")));
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let ok = serde_json::to_value(Envelope::ok(json!({}))).unwrap();
        assert!(ok.get("error").is_none());

        let failed = serde_json::to_value(Envelope::failure(json!("boom"))).unwrap();
        assert!(failed.get("data").is_none());
    }
}
