//! Low-level HTTP client — `LifxHttp`.
//!
//! One method per API endpoint. Returns wire types; the sub-clients in
//! `domain/*/client.rs` wrap this. Every request carries the bearer header,
//! and every call is a single request-response exchange: no retries, no
//! caching, no state kept between calls.

use crate::domain::effect::wire::MoveEffectPayload;
use crate::domain::light::wire::{Light, StateUpdate, TogglePayload};
use crate::domain::results::{ApiError, OperationResults};
use crate::error::HttpError;
use crate::shared::Selector;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the LIFX HTTP Remote API.
pub struct LifxHttp {
    base_url: String,
    client: Client,
    /// Bearer token. Immutable after construction. NEVER exposed publicly.
    access_token: String,
}

impl LifxHttp {
    pub fn new(base_url: &str, access_token: &str) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(Duration::from_secs(30));
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            access_token: access_token.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base}/{selector}[/{suffix}]`, percent-encoding the selector.
    fn endpoint(&self, selector: &Selector, suffix: &str) -> String {
        let mut url = format!(
            "{}/{}",
            self.base_url,
            urlencoding::encode(selector.as_str())
        );
        if !suffix.is_empty() {
            url = format!("{}/{}", url, suffix);
        }
        url
    }

    // ── Lights ───────────────────────────────────────────────────────────

    pub async fn list_lights(&self, selector: &Selector) -> Result<Vec<Light>, HttpError> {
        let url = self.endpoint(selector, "");
        self.get(&url).await
    }

    pub async fn toggle(
        &self,
        selector: &Selector,
        payload: &TogglePayload,
    ) -> Result<OperationResults, HttpError> {
        let url = self.endpoint(selector, "toggle");
        self.post(&url, Some(payload)).await
    }

    pub async fn set_state(
        &self,
        selector: &Selector,
        update: &StateUpdate,
    ) -> Result<OperationResults, HttpError> {
        let url = self.endpoint(selector, "state");
        self.put(&url, update).await
    }

    // ── Effects ──────────────────────────────────────────────────────────

    pub async fn move_effect(
        &self,
        selector: &Selector,
        payload: &MoveEffectPayload,
    ) -> Result<OperationResults, HttpError> {
        let url = self.endpoint(selector, "effects/move");
        self.post(&url, Some(payload)).await
    }

    pub async fn effects_off(&self, selector: &Selector) -> Result<OperationResults, HttpError> {
        let url = self.endpoint(selector, "effects/off");
        self.post(&url, None::<&()>).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.do_request(Method::GET, url, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        self.do_request(Method::POST, url, body).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(Method::PUT, url, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        tracing::debug!(%method, url, "dispatching request");

        let mut req = self
            .client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.access_token));

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status == StatusCode::UNPROCESSABLE_ENTITY {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(parse_rejection(&body_text));
        }

        // Any other status, success or not, is decoded as the success type.
        // The cloud reports per-light failures inside `results`; only 422
        // marks a refused request.
        Ok(resp.json::<T>().await?)
    }
}

/// Map a 422 body to a rejection error.
///
/// The API sends `{"error": "..."}`; if the body is anything else, the raw
/// text becomes the message so the caller still sees what the server said.
fn parse_rejection(body: &str) -> HttpError {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api) => HttpError::Rejected(api.error),
        Err(_) => HttpError::Rejected(body.trim().to_string()),
    }
}

impl Clone for LifxHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            access_token: self.access_token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http() -> LifxHttp {
        LifxHttp::new("https://api.lifx.com/v1/lights/", "secret-token")
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        assert_eq!(http().base_url(), "https://api.lifx.com/v1/lights");
    }

    #[test]
    fn endpoint_joins_selector_and_suffix() {
        let h = http();
        assert_eq!(
            h.endpoint(&Selector::all(), "toggle"),
            "https://api.lifx.com/v1/lights/all/toggle"
        );
        assert_eq!(
            h.endpoint(&Selector::id("d3b2f2d97452"), "state"),
            "https://api.lifx.com/v1/lights/id%3Ad3b2f2d97452/state"
        );
        assert_eq!(
            h.endpoint(&Selector::all(), ""),
            "https://api.lifx.com/v1/lights/all"
        );
    }

    #[test]
    fn endpoint_percent_encodes_selector_spaces() {
        let h = http();
        assert_eq!(
            h.endpoint(&Selector::label("Living Room"), "effects/off"),
            "https://api.lifx.com/v1/lights/label%3ALiving%20Room/effects/off"
        );
    }

    #[test]
    fn rejection_takes_message_from_error_field() {
        let err = parse_rejection(r#"{"error": "bad selector"}"#);
        match err {
            HttpError::Rejected(msg) => assert_eq!(msg, "bad selector"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn rejection_falls_back_to_raw_body() {
        let err = parse_rejection("not json at all\n");
        match err {
            HttpError::Rejected(msg) => assert_eq!(msg, "not json at all"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }
}
