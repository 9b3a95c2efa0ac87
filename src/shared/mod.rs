//! Shared newtypes and enums used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the LIFX cloud sends, so they can be used
//! directly in wire types without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Selector ────────────────────────────────────────────────────────────────

/// Newtype for LIFX selectors — the opaque strings that pick which light(s)
/// an operation targets (e.g. `"all"`, `"id:d3b2f2d97452"`,
/// `"group_id:1c8de82b81f445e7cfaafae49b259c71"`).
///
/// The client never validates a selector; the cloud reports a bad one with
/// HTTP 422.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector(String);

impl Selector {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The `"all"` selector — targets every light on the account.
    pub fn all() -> Self {
        Self("all".to_string())
    }

    /// Target a single light by its id.
    pub fn id(id: &str) -> Self {
        Self(format!("id:{}", id))
    }

    /// Target lights by label.
    pub fn label(label: &str) -> Self {
        Self(format!("label:{}", label))
    }

    /// Target lights by group id.
    pub fn group_id(id: &str) -> Self {
        Self(format!("group_id:{}", id))
    }

    /// Target lights by location id.
    pub fn location_id(id: &str) -> Self {
        Self(format!("location_id:{}", id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Selector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selector(s.to_string()))
    }
}

impl Serialize for Selector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Selector(s))
    }
}

// ─── Power ───────────────────────────────────────────────────────────────────

/// Power state of a light. Lowercase `"on"`/`"off"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    On,
    Off,
}

impl Power {
    pub fn as_str(&self) -> &'static str {
        match self {
            Power::On => "on",
            Power::Off => "off",
        }
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Direction ───────────────────────────────────────────────────────────────

/// Direction of a move effect. Lowercase `"forward"`/`"backward"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
