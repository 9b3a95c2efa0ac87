//! Network URL constants for the LIFX SDK.

/// Default base URL for the LIFX HTTP Remote API lights endpoints.
pub const DEFAULT_API_URL: &str = "https://api.lifx.com/v1/lights";
