//! Wire types for the lights endpoints.

use crate::shared::{Power, Selector};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Responses ───────────────────────────────────────────────────────────────

/// One light as returned by `GET /{selector}`.
///
/// Lenient on purpose: the cloud adds fields over time, and some (`color`,
/// `group`, timestamps) are absent for certain products or firmware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Light {
    pub id: String,
    #[serde(default)]
    pub uuid: Option<String>,
    pub label: String,
    pub connected: bool,
    pub power: Power,
    #[serde(default)]
    pub color: Option<ColorPoint>,
    pub brightness: f64,
    #[serde(default)]
    pub group: Option<Membership>,
    #[serde(default)]
    pub location: Option<Membership>,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub seconds_since_seen: Option<f64>,
}

impl Light {
    /// Selector targeting exactly this light.
    pub fn selector(&self) -> Selector {
        Selector::id(&self.id)
    }
}

/// HSBK color coordinates of a light.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColorPoint {
    pub hue: f64,
    pub saturation: f64,
    pub kelvin: u32,
}

/// Group or location a light belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub id: String,
    pub name: String,
}

// ─── Request bodies ──────────────────────────────────────────────────────────

/// Body for `POST /{selector}/toggle`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TogglePayload {
    /// Seconds to spend fading to the new power state.
    pub duration: f64,
}

/// Body for `PUT /{selector}/state`.
///
/// Fields left as `None` are omitted from the JSON entirely, so the cloud
/// only changes what the caller asked for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<Power>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
}

impl StateUpdate {
    /// Update only the brightness, from 0.0 to 1.0.
    pub fn brightness(brightness: f64) -> Self {
        Self {
            brightness: Some(brightness),
            ..Self::default()
        }
    }

    /// Full update: power, color string, and brightness together.
    pub fn full(power: Power, color: impl Into<String>, brightness: f64) -> Self {
        Self {
            power: Some(power),
            color: Some(color.into()),
            brightness: Some(brightness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn toggle_payload_carries_only_duration() {
        let body = serde_json::to_value(TogglePayload { duration: 0.0 }).unwrap();
        assert_eq!(body, json!({"duration": 0.0}));
    }

    #[test]
    fn brightness_update_serializes_single_field() {
        let body = serde_json::to_value(StateUpdate::brightness(0.8)).unwrap();
        assert_eq!(body, json!({"brightness": 0.8}));
    }

    #[test]
    fn full_update_serializes_all_three_fields() {
        let body =
            serde_json::to_value(StateUpdate::full(Power::On, "#ff0000", 0.5)).unwrap();
        assert_eq!(
            body,
            json!({"power": "on", "color": "#ff0000", "brightness": 0.5})
        );
    }

    #[test]
    fn light_deserializes_from_cloud_json() {
        let light: Light = serde_json::from_value(json!({
            "id": "d3b2f2d97452",
            "uuid": "8fa5f072-af97-44ed-ae54-e70fd7bd9d20",
            "label": "Left Lamp",
            "connected": true,
            "power": "on",
            "color": {"hue": 250.0, "saturation": 0.5, "kelvin": 3500},
            "brightness": 0.5,
            "group": {"id": "1c8de82b81f445e7cfaafae49b259c71", "name": "Lounge"},
            "location": {"id": "1d6fe8ef0fde4c6d77b0012dc736662c", "name": "Home"},
            "last_seen": "2017-06-27T10:44:06Z",
            "seconds_since_seen": 2.0
        }))
        .unwrap();
        assert_eq!(light.label, "Left Lamp");
        assert_eq!(light.power, Power::On);
        assert_eq!(light.selector().as_str(), "id:d3b2f2d97452");
        assert_eq!(light.color.unwrap().kelvin, 3500);
    }

    #[test]
    fn light_tolerates_missing_optional_fields() {
        let light: Light = serde_json::from_value(json!({
            "id": "8c1dd4f2b2a0",
            "label": "Strip",
            "connected": false,
            "power": "off",
            "brightness": 1.0
        }))
        .unwrap();
        assert!(light.color.is_none());
        assert!(light.last_seen.is_none());
    }
}
