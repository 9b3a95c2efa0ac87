//! Effect domain — animated behaviors that run on the light firmware.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::MoveEffectPayload;
