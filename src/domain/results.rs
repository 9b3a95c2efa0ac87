//! Wire types shared by every mutating endpoint, plus a diagnostic logger.
//!
//! All state-changing LIFX endpoints answer with the same shape: a `results`
//! array holding one outcome per targeted light. A refused request instead
//! carries a top-level `error` string (and HTTP 422).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response from a mutating endpoint: one entry per targeted light.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResults {
    pub results: Vec<OperationResult>,
}

impl OperationResults {
    /// True when every targeted light reported `ok`.
    pub fn all_ok(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.status == OperationStatus::Ok)
    }
}

/// Per-light outcome of a mutating operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub status: OperationStatus,
}

/// Status the cloud reports for a single light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    Ok,
    TimedOut,
    Offline,
    /// Anything the cloud adds that this SDK does not know about yet.
    #[serde(untagged)]
    Other(String),
}

/// Error body the API sends alongside HTTP 422.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Log the outcome of a raw API response, entry by entry.
///
/// Walks `response.results` and logs each light's `status`; if `results` is
/// absent, logs the top-level `error` instead. Diagnostic only — no other
/// method depends on it, and it returns nothing.
pub fn log_results(response: &Value) {
    match response.get("results").and_then(Value::as_array) {
        Some(results) => {
            for entry in results {
                let id = entry.get("id").and_then(Value::as_str).unwrap_or("?");
                let status = entry
                    .get("status")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown");
                tracing::info!(id, status, "light operation result");
            }
        }
        None => {
            let error = response
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            tracing::warn!(error, "API reported an error");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn operation_status_round_trips_known_values() {
        for (raw, status) in [
            ("\"ok\"", OperationStatus::Ok),
            ("\"timed_out\"", OperationStatus::TimedOut),
            ("\"offline\"", OperationStatus::Offline),
        ] {
            let parsed: OperationStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed, status);
            assert_eq!(serde_json::to_string(&parsed).unwrap(), raw);
        }
    }

    #[test]
    fn operation_status_tolerates_unknown_values() {
        let parsed: OperationStatus = serde_json::from_str("\"throttled\"").unwrap();
        assert_eq!(parsed, OperationStatus::Other("throttled".to_string()));
    }

    #[test]
    fn all_ok_reflects_per_light_outcomes() {
        let resp: OperationResults = serde_json::from_value(json!({
            "results": [
                {"id": "d3b2f2d97452", "label": "Left Lamp", "status": "ok"},
                {"id": "8c1dd4f2b2a0", "status": "timed_out"}
            ]
        }))
        .unwrap();
        assert!(!resp.all_ok());
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].label.as_deref(), Some("Left Lamp"));
    }

    #[test]
    fn log_results_handles_both_response_shapes() {
        // Must not panic on either shape, nor on junk.
        log_results(&json!({"results": [{"id": "abc", "status": "ok"}]}));
        log_results(&json!({"error": "Could not find light"}));
        log_results(&json!({"unexpected": true}));
    }
}
