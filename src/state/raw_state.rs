// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw device status document.

use serde_json::{Map, Value};

use crate::types::HvacMode;
use crate::types::tables::{FAN_TABLE, MODE_TABLE, OFF_PRESET, PRESET_TABLE, SWING_TABLE};

/// Field names of the Eolia status document.
pub mod fields {
    /// Whether the unit is running (`bool`).
    pub const OPERATION_STATUS: &str = "operation_status";
    /// Vendor operation mode key.
    pub const OPERATION_MODE: &str = "operation_mode";
    /// Fan speed code.
    pub const WIND_VOLUME: &str = "wind_volume";
    /// Vertical louver position.
    pub const WIND_DIRECTION: &str = "wind_direction";
    /// Horizontal louver position.
    pub const WIND_DIRECTION_HORIZON: &str = "wind_direction_horizon";
    /// Target temperature; `0` when the mode has none.
    pub const TEMPERATURE: &str = "temperature";
    /// Room temperature.
    pub const INSIDE_TEMP: &str = "inside_temp";
    /// Outdoor temperature; `999` when unknown.
    pub const OUTSIDE_TEMP: &str = "outside_temp";
    /// Room relative humidity.
    pub const INSIDE_HUMIDITY: &str = "inside_humidity";
    /// Off-timer value.
    pub const TIMER_VALUE: &str = "timer_value";
    /// Token to echo back on the next write.
    pub const OPERATION_TOKEN: &str = "operation_token";
    /// Appliance id sent alongside the operation token.
    pub const APPLIANCE_ID: &str = "appliance_id";
    /// nanoe X generator switch.
    pub const NANOEX: &str = "nanoex";
    /// Air quality setting.
    pub const AIRQUALITY: &str = "airquality";
    /// Air flow setting.
    pub const AIR_FLOW: &str = "air_flow";
}

/// Outdoor temperature reported when the sensor has no reading.
pub const OUTSIDE_TEMP_UNKNOWN: f64 = 999.0;

/// The status document exactly as last received from the service.
///
/// Fields this client does not know about are kept as-is. The document is
/// replaced as a whole on every successful response and only ever mutated
/// locally while preparing a write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDeviceState {
    fields: Map<String, Value>,
}

impl RawDeviceState {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if no field has been received yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // ========== Typed accessors ==========

    /// Whether the unit is running.
    #[must_use]
    pub fn operation_status(&self) -> Option<bool> {
        self.get(fields::OPERATION_STATUS).and_then(Value::as_bool)
    }

    /// Vendor operation mode key (e.g. `"Cooling"`).
    #[must_use]
    pub fn operation_mode(&self) -> Option<&str> {
        self.get(fields::OPERATION_MODE).and_then(Value::as_str)
    }

    /// Fan speed code.
    #[must_use]
    pub fn wind_volume(&self) -> Option<i64> {
        self.get(fields::WIND_VOLUME).and_then(Value::as_i64)
    }

    /// Horizontal louver key (e.g. `"to_left"`).
    #[must_use]
    pub fn wind_direction_horizon(&self) -> Option<&str> {
        self.get(fields::WIND_DIRECTION_HORIZON)
            .and_then(Value::as_str)
    }

    /// Target temperature; numeric strings are accepted.
    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        self.get(fields::TEMPERATURE).and_then(number)
    }

    /// Room temperature.
    #[must_use]
    pub fn inside_temp(&self) -> Option<f64> {
        self.get(fields::INSIDE_TEMP).and_then(number)
    }

    /// Outdoor temperature, `None` when the sensor reports `999`.
    #[must_use]
    pub fn outside_temp(&self) -> Option<f64> {
        self.get(fields::OUTSIDE_TEMP)
            .and_then(number)
            .filter(|t| (t - OUTSIDE_TEMP_UNKNOWN).abs() > f64::EPSILON)
    }

    /// Room relative humidity.
    #[must_use]
    pub fn inside_humidity(&self) -> Option<f64> {
        self.get(fields::INSIDE_HUMIDITY).and_then(number)
    }

    /// Off-timer value.
    #[must_use]
    pub fn timer_value(&self) -> Option<i64> {
        self.get(fields::TIMER_VALUE).and_then(Value::as_i64)
    }

    /// Operation token, if the document carries a usable one.
    ///
    /// `null` and the empty string count as absent.
    #[must_use]
    pub fn operation_token(&self) -> Option<&Value> {
        self.get(fields::OPERATION_TOKEN)
            .filter(|token| !token.is_null() && token.as_str() != Some(""))
    }

    // ========== Normalized views ==========

    /// Normalized mode. A stopped unit, or an unknown mode key, reads as
    /// [`HvacMode::Off`].
    #[must_use]
    pub fn hvac_mode(&self) -> HvacMode {
        if self.operation_status() == Some(false) {
            return HvacMode::Off;
        }
        self.operation_mode()
            .and_then(|key| MODE_TABLE.get(&key))
            .copied()
            .unwrap_or_default()
    }

    /// Preset label for the current operation mode.
    #[must_use]
    pub fn preset(&self) -> Option<&'static str> {
        if self.operation_status() == Some(false) {
            return Some(OFF_PRESET);
        }
        self.operation_mode()
            .and_then(|key| PRESET_TABLE.get(&key))
            .copied()
    }

    /// Fan speed label.
    #[must_use]
    pub fn fan_speed(&self) -> Option<&'static str> {
        self.wind_volume()
            .and_then(|code| FAN_TABLE.get(&code))
            .copied()
    }

    /// Horizontal swing position label.
    #[must_use]
    pub fn swing_position(&self) -> Option<&'static str> {
        self.wind_direction_horizon()
            .and_then(|key| SWING_TABLE.get(&key))
            .copied()
    }

    // ========== Local mutation ==========

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.fields.insert(field.to_string(), value.into());
    }

    /// Sets `operation_status`.
    pub fn set_operation_status(&mut self, running: bool) {
        self.set(fields::OPERATION_STATUS, running);
    }

    /// Sets `operation_mode`.
    pub fn set_operation_mode(&mut self, key: &str) {
        self.set(fields::OPERATION_MODE, key);
    }

    /// Sets `wind_volume`.
    pub fn set_wind_volume(&mut self, code: i64) {
        self.set(fields::WIND_VOLUME, code);
    }

    /// Sets `wind_direction_horizon`.
    pub fn set_wind_direction_horizon(&mut self, key: &str) {
        self.set(fields::WIND_DIRECTION_HORIZON, key);
    }

    /// Sets `temperature` to its string wire form.
    pub fn set_temperature(&mut self, wire: String) {
        self.set(fields::TEMPERATURE, wire);
    }
}

impl From<Map<String, Value>> for RawDeviceState {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<RawDeviceState> for Value {
    fn from(state: RawDeviceState) -> Self {
        Value::Object(state.fields)
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
