//! Lights sub-client — enumeration, toggling, state changes.

use crate::client::LifxClient;
use crate::domain::light::wire::{Light, StateUpdate, TogglePayload};
use crate::domain::results::OperationResults;
use crate::error::LifxError;
use crate::shared::{Power, Selector};

pub struct Lights<'a> {
    pub(crate) client: &'a LifxClient,
}

impl<'a> Lights<'a> {
    /// Enumerate every light on the account.
    pub async fn list_all(&self) -> Result<Vec<Light>, LifxError> {
        self.list(&Selector::all()).await
    }

    /// Enumerate the lights matched by `selector`.
    pub async fn list(&self, selector: &Selector) -> Result<Vec<Light>, LifxError> {
        Ok(self.client.http.list_lights(selector).await?)
    }

    /// Toggle power on the selected light(s), fading over `duration` seconds.
    pub async fn toggle(
        &self,
        selector: &Selector,
        duration: f64,
    ) -> Result<OperationResults, LifxError> {
        Ok(self
            .client
            .http
            .toggle(selector, &TogglePayload { duration })
            .await?)
    }

    /// Toggle every light on the account at once.
    ///
    /// Always targets the literal `all` selector, whatever selectors the
    /// caller may hold.
    pub async fn toggle_all(&self, duration: f64) -> Result<OperationResults, LifxError> {
        self.toggle(&Selector::all(), duration).await
    }

    /// Set only the brightness of the selected light(s), from 0.0 to 1.0.
    pub async fn set_brightness(
        &self,
        selector: &Selector,
        brightness: f64,
    ) -> Result<OperationResults, LifxError> {
        Ok(self
            .client
            .http
            .set_state(selector, &StateUpdate::brightness(brightness))
            .await?)
    }

    /// Set power, color, and brightness of the selected light(s) together.
    ///
    /// `color` is any string the LIFX color syntax accepts, e.g. `"#ff0000"`
    /// or `"kelvin:3500"`.
    pub async fn set_state(
        &self,
        selector: &Selector,
        power: Power,
        color: impl Into<String>,
        brightness: f64,
    ) -> Result<OperationResults, LifxError> {
        Ok(self
            .client
            .http
            .set_state(selector, &StateUpdate::full(power, color, brightness))
            .await?)
    }

    /// Apply a pre-built partial state update.
    pub async fn update(
        &self,
        selector: &Selector,
        update: &StateUpdate,
    ) -> Result<OperationResults, LifxError> {
        Ok(self.client.http.set_state(selector, update).await?)
    }
}
