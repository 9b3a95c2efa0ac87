//! Wire types for the effects endpoints.

use crate::shared::Direction;
use serde::{Deserialize, Serialize};

/// Body for `POST /{selector}/effects/move`.
///
/// Field names match the cloud exactly (`power_on`, not `powerOn`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveEffectPayload {
    pub direction: Direction,
    /// Seconds per effect cycle.
    pub period: f64,
    /// Number of times to move the pattern. May be fractional.
    pub cycles: f64,
    /// Power the light on before starting the effect.
    pub power_on: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn move_payload_matches_cloud_field_names() {
        let body = serde_json::to_value(MoveEffectPayload {
            direction: Direction::Forward,
            period: 2.0,
            cycles: 5.0,
            power_on: true,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "direction": "forward",
                "period": 2.0,
                "cycles": 5.0,
                "power_on": true
            })
        );
    }
}
