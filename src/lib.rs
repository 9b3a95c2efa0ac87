//! # LIFX Cloud SDK
//!
//! A Rust client for the LIFX HTTP Remote API, small enough for constrained
//! devices: one outbound request per call, no retries, no caching, no state
//! between calls.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, wire types, errors (always available, WASM-safe)
//! 2. **HTTP API** — `LifxHttp`, one method per endpoint with the bearer header
//! 3. **High-Level Client** — `LifxClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lifx_cloud::prelude::*;
//!
//! let client = LifxClient::builder()
//!     .access_token("your-token")
//!     .build()?;
//!
//! let lights = client.lights().list_all().await?;
//! client.lights().toggle_all(1.0).await?;
//! client
//!     .lights()
//!     .set_state(&Selector::label("Kitchen"), Power::On, "#ff0000", 0.5)
//!     .await?;
//! ```
//!
//! ## Errors
//!
//! The cloud refuses a request with HTTP 422 and an `error` message; that
//! surfaces as [`error::HttpError::Rejected`]. Every other failure is a
//! transport error propagated untouched. Any other status code the cloud
//! sends — 401 and 500 included — is not treated as an error: its body is
//! decoded and returned.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `LifxClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Direction, Power, Selector};

    // Domain types — light
    pub use crate::domain::light::{ColorPoint, Light, Membership, StateUpdate, TogglePayload};

    // Domain types — effect
    pub use crate::domain::effect::MoveEffectPayload;

    // Mutation results + diagnostics
    pub use crate::domain::results::{
        log_results, OperationResult, OperationResults, OperationStatus,
    };

    // Errors
    pub use crate::error::{HttpError, LifxError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{EffectsClient, LifxClient, LifxClientBuilder, LightsClient};
    #[cfg(feature = "http")]
    pub use crate::http::LifxHttp;
}
