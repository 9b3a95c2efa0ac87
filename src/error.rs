//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum LifxError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP-layer errors.
///
/// Only two things can go wrong at call time: the transport fails, or the
/// API rejects the request with 422. Other non-2xx statuses are not treated
/// as errors — their bodies are decoded and handed back to the caller.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// HTTP 422 — the API refused the operation. Carries the `error`
    /// message from the response body.
    #[error("Rejected by API: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_carries_api_message() {
        let err = HttpError::Rejected("Could not find light".to_string());
        assert_eq!(err.to_string(), "Rejected by API: Could not find light");
    }

    #[test]
    fn http_error_converts_into_lifx_error() {
        let err: LifxError = HttpError::Rejected("bad selector".to_string()).into();
        assert!(matches!(err, LifxError::Http(HttpError::Rejected(_))));
    }
}
