// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normalized climate state.

use crate::types::{HvacMode, TargetTemperature};

use super::RawDeviceState;

/// Snapshot of the appliance in caller vocabulary.
///
/// Computed on demand from the raw status document and the cached target
/// temperature; never stored. All fields are optional where the service
/// may omit them.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateState {
    /// Operating mode.
    pub mode: HvacMode,
    /// Preset label of the current operation mode.
    pub preset: Option<&'static str>,
    /// Fan speed label.
    pub fan_speed: Option<&'static str>,
    /// Horizontal swing position label.
    pub swing_position: Option<&'static str>,
    /// Last known target temperature.
    pub target_temperature: TargetTemperature,
    /// Room temperature in °C.
    pub current_temperature: Option<f64>,
    /// Room relative humidity in %.
    pub humidity: Option<f64>,
    /// Outdoor temperature in °C, `None` when the unit has no reading.
    pub outside_temperature: Option<f64>,
    /// Off-timer value.
    pub timer_value: Option<i64>,
}

impl ClimateState {
    /// Derives the normalized view of `raw`.
    #[must_use]
    pub fn from_raw(raw: &RawDeviceState, target_temperature: TargetTemperature) -> Self {
        Self {
            mode: raw.hvac_mode(),
            preset: raw.preset(),
            fan_speed: raw.fan_speed(),
            swing_position: raw.swing_position(),
            target_temperature,
            current_temperature: raw.inside_temp(),
            humidity: raw.inside_humidity(),
            outside_temperature: raw.outside_temp(),
            timer_value: raw.timer_value(),
        }
    }

    /// Returns `true` unless the unit is off.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.mode != HvacMode::Off
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn from_raw_document() {
        let Value::Object(map) = json!({
            "operation_status": true,
            "operation_mode": "Cooling",
            "wind_volume": 5,
            "wind_direction_horizon": "nearby_left",
            "temperature": 26.0,
            "inside_temp": 28.5,
            "outside_temp": 999,
            "inside_humidity": 60,
            "timer_value": 120,
        }) else {
            unreachable!()
        };
        let raw = RawDeviceState::from(map);
        let state = ClimateState::from_raw(&raw, TargetTemperature::new(26.0).unwrap());

        assert_eq!(state.mode, HvacMode::Cool);
        assert_eq!(state.preset, Some("冷房"));
        assert_eq!(state.fan_speed, Some("4"));
        assert_eq!(state.swing_position, Some("ちょっと左"));
        assert_eq!(state.current_temperature, Some(28.5));
        assert_eq!(state.humidity, Some(60.0));
        assert_eq!(state.outside_temperature, None);
        assert_eq!(state.timer_value, Some(120));
        assert!(state.is_on());
    }

    #[test]
    fn empty_document() {
        let state = ClimateState::from_raw(&RawDeviceState::new(), TargetTemperature::INITIAL);
        assert_eq!(state.mode, HvacMode::Off);
        assert_eq!(state.preset, None);
        assert_eq!(state.target_temperature, TargetTemperature::INITIAL);
        assert!(!state.is_on());
    }
}
