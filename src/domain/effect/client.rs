//! Effects sub-client — animated firmware effects.

use crate::client::LifxClient;
use crate::domain::effect::wire::MoveEffectPayload;
use crate::domain::results::OperationResults;
use crate::error::LifxError;
use crate::shared::{Direction, Selector};

pub struct Effects<'a> {
    pub(crate) client: &'a LifxClient,
}

impl<'a> Effects<'a> {
    /// Start a linear move effect on the selected light(s).
    ///
    /// Only has a visible result on multizone devices (strips, beams).
    pub async fn move_effect(
        &self,
        selector: &Selector,
        direction: Direction,
        period: f64,
        cycles: f64,
        power_on: bool,
    ) -> Result<OperationResults, LifxError> {
        let payload = MoveEffectPayload {
            direction,
            period,
            cycles,
            power_on,
        };
        Ok(self.client.http.move_effect(selector, &payload).await?)
    }

    /// Stop whatever effect is running on the selected light(s).
    pub async fn off(&self, selector: &Selector) -> Result<OperationResults, LifxError> {
        Ok(self.client.http.effects_off(selector).await?)
    }
}
