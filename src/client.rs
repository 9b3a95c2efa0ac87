//! High-level client — `LifxClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::effect::client::Effects;
use crate::domain::light::client::Lights;
use crate::error::LifxError;
use crate::http::LifxHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::effect::client::Effects as EffectsClient;
pub use crate::domain::light::client::Lights as LightsClient;

/// The primary entry point for the LIFX SDK.
///
/// Provides nested sub-client accessors per domain: `client.lights()`,
/// `client.effects()`. Immutable once built — the token and base URL never
/// change, so the client can be shared freely across tasks.
pub struct LifxClient {
    pub(crate) http: LifxHttp,
}

impl LifxClient {
    pub fn builder() -> LifxClientBuilder {
        LifxClientBuilder::default()
    }

    /// Shorthand for a client against the default cloud endpoint.
    pub fn new(access_token: &str) -> Self {
        Self {
            http: LifxHttp::new(crate::network::DEFAULT_API_URL, access_token),
        }
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn lights(&self) -> Lights<'_> {
        Lights { client: self }
    }

    pub fn effects(&self) -> Effects<'_> {
        Effects { client: self }
    }
}

impl std::fmt::Debug for LifxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The access token must never leak, so fields are omitted.
        f.debug_struct("LifxClient").finish_non_exhaustive()
    }
}

impl Clone for LifxClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct LifxClientBuilder {
    base_url: String,
    access_token: Option<String>,
}

impl Default for LifxClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            access_token: None,
        }
    }
}

impl LifxClientBuilder {
    /// Point the client at a different endpoint (e.g. a test server).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// The personal access token from <https://cloud.lifx.com/settings>.
    pub fn access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn build(self) -> Result<LifxClient, LifxError> {
        let token = self
            .access_token
            .ok_or_else(|| LifxError::Config("access token is required".to_string()))?;
        Ok(LifxClient {
            http: LifxHttp::new(&self.base_url, &token),
        })
    }
}
