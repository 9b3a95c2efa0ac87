//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `wire.rs` — Raw serde structs matching the cloud's JSON exactly
//! - `client.rs` — Sub-client with the HTTP methods for that slice
//!
//! `results` holds the response shape every mutating endpoint shares.

pub mod effect;
pub mod light;
pub mod results;
