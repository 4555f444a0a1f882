// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level climate controller for an Eolia air conditioner.
//!
//! The service only accepts full status documents, so every command is a
//! read-modify-write: the cached document is copied, the requested field
//! is changed, the writable subset is sent with `PUT`, and the response
//! becomes the new cached document.
//!
//! Commands and refreshes on one [`ClimateDevice`] run one at a time, in
//! the order they were issued.
//!
//! ```no_run
//! use eolia_lib::{ClimateDevice, EoliaConfig, HvacMode};
//!
//! # async fn example() -> eolia_lib::Result<()> {
//! let device = ClimateDevice::builder(EoliaConfig::new("user@example.com", "secret", "AC-01"))
//!     .build()
//!     .await?;
//!
//! device.set_mode(HvacMode::Cool).await?;
//! device.set_target_temperature(26.0).await?;
//! println!("room: {:?} °C", device.current_temperature());
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::ClimateDeviceBuilder;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::Method;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::{Error, ValueError};
use crate::protocol::{ApiResponse, EoliaConfig, Protocol, Session, status_path};
use crate::state::{ClimateState, RawDeviceState, WritePayload, fields};
use crate::types::tables::{
    FAN_TABLE, MODE_TABLE, OFF_PRESET, PRESET_TABLE, SWING_TABLE, uses_target_temperature,
};
use crate::types::{HvacMode, TargetTemperature};

/// Cached knowledge about the appliance.
#[derive(Debug, Clone, Default)]
struct Cache {
    raw: RawDeviceState,
    target: TargetTemperature,
    operation_token: Option<Value>,
}

impl Cache {
    /// Adopts a status document received from the service.
    fn apply_response(&mut self, raw: RawDeviceState) {
        if raw.get(fields::OPERATION_TOKEN).is_some() {
            self.operation_token = raw.operation_token().cloned();
        }

        // 0 means the mode has no target; keep the user's last setting.
        if let Some(target) = raw
            .temperature()
            .filter(|t| t.abs() > f64::EPSILON)
            .and_then(|t| TargetTemperature::new(t).ok())
        {
            self.target = target;
        }

        self.raw = raw;
    }
}

/// A cloud-connected Eolia air conditioner.
///
/// # Type Parameter
///
/// `P` is the transport; [`Session`] talks to the real service.
#[derive(Debug)]
pub struct ClimateDevice<P: Protocol> {
    protocol: Arc<P>,
    appliance_id: String,
    status_path: String,
    commands: Mutex<()>,
    cache: RwLock<Cache>,
}

impl ClimateDevice<Session> {
    /// Returns a builder connecting to the Eolia cloud with `config`.
    #[must_use]
    pub fn builder(config: EoliaConfig) -> ClimateDeviceBuilder {
        ClimateDeviceBuilder::new(config)
    }
}

impl<P: Protocol> ClimateDevice<P> {
    /// Suggested interval between [`refresh`](Self::refresh) calls.
    pub const SCAN_INTERVAL: Duration = Duration::from_secs(60);

    /// Creates a controller for `appliance_id` over an existing transport.
    ///
    /// The id is percent-encoded here. No request is made.
    #[must_use]
    pub fn new(protocol: P, appliance_id: &str) -> Self {
        let appliance_id = urlencoding::encode(appliance_id).into_owned();
        Self {
            protocol: Arc::new(protocol),
            status_path: status_path(&appliance_id),
            appliance_id,
            commands: Mutex::new(()),
            cache: RwLock::new(Cache::default()),
        }
    }

    /// Returns the transport.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Returns the percent-encoded appliance id.
    #[must_use]
    pub fn appliance_id(&self) -> &str {
        &self.appliance_id
    }

    // ========== Synchronization ==========

    /// Fetches the current status from the service.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a JSON object;
    /// the cached state is left untouched in that case.
    pub async fn refresh(&self) -> Result<ClimateState, Error> {
        let _turn = self.commands.lock().await;

        let response = self
            .protocol
            .request(Method::GET, &self.status_path, None)
            .await?;
        self.adopt(&response)?;
        Ok(self.state())
    }

    /// Runs the write protocol.
    ///
    /// `mutate` edits a copy of the cached document and the cached target.
    /// The copy only replaces the cache through the service's answer.
    async fn write<F>(&self, mutate: F) -> Result<ClimateState, Error>
    where
        F: FnOnce(&mut RawDeviceState, &mut TargetTemperature),
    {
        let _turn = self.commands.lock().await;

        let payload = {
            let mut cache = self.cache.write();
            let mut raw = cache.raw.clone();
            let mut target = cache.target;
            mutate(&mut raw, &mut target);

            raw.set_temperature("0".to_string());
            if raw.operation_mode().is_some_and(uses_target_temperature) {
                target = target.clamped();
                raw.set_temperature(target.to_wire());
            }
            cache.target = target;

            WritePayload::from_raw(&raw)
                .with_token(cache.operation_token.as_ref(), &self.appliance_id)
                .into_value()
        };

        let response = self
            .protocol
            .request(Method::PUT, &self.status_path, Some(&payload))
            .await?;
        self.adopt(&response)?;
        Ok(self.state())
    }

    fn adopt(&self, response: &ApiResponse) -> Result<(), Error> {
        let raw = RawDeviceState::from(response.json_object()?);
        self.cache.write().apply_response(raw);
        Ok(())
    }

    // ========== Commands ==========

    /// Sets the operating mode. [`HvacMode::Off`] stops the unit.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_mode(&self, mode: HvacMode) -> Result<ClimateState, Error> {
        tracing::debug!(mode = %mode, "Setting HVAC mode");

        if mode == HvacMode::Off {
            return self.write(|raw, _| raw.set_operation_status(false)).await;
        }

        let key = *MODE_TABLE
            .key_of(&mode)
            .ok_or_else(|| ValueError::UnmappedMode(mode.to_string()))?;
        self.write(|raw, _| {
            raw.set_operation_status(true);
            raw.set_operation_mode(key);
        })
        .await
    }

    /// Selects a preset by label.
    ///
    /// `"off"` and the `Stop` preset label stop the unit.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownPreset` without contacting the service
    /// if the label is not a preset, or error if the write fails.
    pub async fn set_preset(&self, label: &str) -> Result<ClimateState, Error> {
        tracing::debug!(preset = label, "Setting preset");

        if label == HvacMode::Off.as_str() || label == OFF_PRESET {
            return self.write(|raw, _| raw.set_operation_status(false)).await;
        }

        let key = *PRESET_TABLE
            .key_of(&label)
            .ok_or_else(|| ValueError::UnknownPreset(label.to_string()))?;
        self.write(|raw, _| {
            raw.set_operation_status(true);
            raw.set_operation_mode(key);
        })
        .await
    }

    /// Sets the fan speed by label.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownFanSpeed` without contacting the service
    /// if the label is unknown, or error if the write fails.
    pub async fn set_fan_speed(&self, label: &str) -> Result<ClimateState, Error> {
        let code = *FAN_TABLE
            .key_of(&label)
            .ok_or_else(|| ValueError::UnknownFanSpeed(label.to_string()))?;
        tracing::debug!(fan_speed = label, code, "Setting fan speed");
        self.write(|raw, _| raw.set_wind_volume(code)).await
    }

    /// Sets the horizontal swing position by label.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownSwingPosition` without contacting the
    /// service if the label is unknown, or error if the write fails.
    pub async fn set_swing_position(&self, label: &str) -> Result<ClimateState, Error> {
        let key = *SWING_TABLE
            .key_of(&label)
            .ok_or_else(|| ValueError::UnknownSwingPosition(label.to_string()))?;
        tracing::debug!(swing = label, key, "Setting swing position");
        self.write(|raw, _| raw.set_wind_direction_horizon(key))
            .await
    }

    /// Sets the target temperature in °C.
    ///
    /// The value is sent only in modes that use a target, limited to
    /// 16-30 °C; otherwise it is remembered for later.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFiniteTemperature` for NaN or infinity, or
    /// error if the write fails.
    pub async fn set_target_temperature(&self, celsius: f64) -> Result<ClimateState, Error> {
        let requested = TargetTemperature::new(celsius)?;
        tracing::debug!(temperature = celsius, "Setting target temperature");
        self.write(|_, target| *target = requested).await
    }

    // ========== Normalized state ==========

    /// Returns a snapshot of the normalized state.
    #[must_use]
    pub fn state(&self) -> ClimateState {
        let cache = self.cache.read();
        ClimateState::from_raw(&cache.raw, cache.target)
    }

    /// Returns a copy of the last status document received.
    #[must_use]
    pub fn raw(&self) -> RawDeviceState {
        self.cache.read().raw.clone()
    }

    /// Returns the cached operation token.
    #[must_use]
    pub fn operation_token(&self) -> Option<Value> {
        self.cache.read().operation_token.clone()
    }

    /// Current operating mode.
    #[must_use]
    pub fn mode(&self) -> HvacMode {
        self.cache.read().raw.hvac_mode()
    }

    /// Modes accepted by [`set_mode`](Self::set_mode).
    #[must_use]
    pub fn available_modes(&self) -> Vec<HvacMode> {
        MODE_TABLE.values().copied().collect()
    }

    /// Current preset label.
    #[must_use]
    pub fn preset(&self) -> Option<&'static str> {
        self.cache.read().raw.preset()
    }

    /// Labels accepted by [`set_preset`](Self::set_preset).
    #[must_use]
    pub fn available_presets(&self) -> Vec<&'static str> {
        PRESET_TABLE.values().copied().collect()
    }

    /// Current fan speed label.
    #[must_use]
    pub fn fan_speed(&self) -> Option<&'static str> {
        self.cache.read().raw.fan_speed()
    }

    /// Labels accepted by [`set_fan_speed`](Self::set_fan_speed).
    #[must_use]
    pub fn available_fan_speeds(&self) -> Vec<&'static str> {
        FAN_TABLE.values().copied().collect()
    }

    /// Current horizontal swing position label.
    #[must_use]
    pub fn swing_position(&self) -> Option<&'static str> {
        self.cache.read().raw.swing_position()
    }

    /// Labels accepted by [`set_swing_position`](Self::set_swing_position).
    #[must_use]
    pub fn available_swing_positions(&self) -> Vec<&'static str> {
        SWING_TABLE.values().copied().collect()
    }

    /// Last known target temperature in °C.
    #[must_use]
    pub fn target_temperature(&self) -> f64 {
        self.cache.read().target.value()
    }

    /// Lowest settable target temperature.
    #[must_use]
    pub fn min_temperature(&self) -> f64 {
        TargetTemperature::MIN.value()
    }

    /// Highest settable target temperature.
    #[must_use]
    pub fn max_temperature(&self) -> f64 {
        TargetTemperature::MAX.value()
    }

    /// Target temperature granularity.
    #[must_use]
    pub fn temperature_step(&self) -> f64 {
        TargetTemperature::STEP
    }

    /// Room temperature in °C.
    #[must_use]
    pub fn current_temperature(&self) -> Option<f64> {
        self.cache.read().raw.inside_temp()
    }

    /// Room relative humidity in %.
    #[must_use]
    pub fn humidity(&self) -> Option<f64> {
        self.cache.read().raw.inside_humidity()
    }

    /// Outdoor temperature in °C, `None` when the unit has no reading.
    #[must_use]
    pub fn outside_temperature(&self) -> Option<f64> {
        self.cache.read().raw.outside_temp()
    }

    /// Off-timer value.
    #[must_use]
    pub fn timer_value(&self) -> Option<i64> {
        self.cache.read().raw.timer_value()
    }
}
