//! Light domain — enumeration and state changes for individual lights.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{ColorPoint, Light, Membership, StateUpdate, TogglePayload};
