// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed vendor vocabularies of the Eolia API.
//!
//! Each table maps the raw token found in a device status document to the
//! value presented to callers. Labels are the Japanese strings shown by the
//! vendor's mobile application.

use super::{HvacMode, LookupTable};

/// `operation_mode` vendor key to normalized HVAC mode.
pub static MODE_TABLE: LookupTable<&str, HvacMode> = LookupTable::new(&[
    ("Stop", HvacMode::Off),
    ("Heating", HvacMode::Heat),
    ("Cooling", HvacMode::Cool),
    ("Auto", HvacMode::Auto),
    ("Dehumidifying", HvacMode::Dry),
    ("Nanoe", HvacMode::FanOnly),
]);

/// `operation_mode` vendor key to preset label.
///
/// Superset of [`MODE_TABLE`]: `Blast`, `KeepMode`, `CoolDehumidifying`,
/// `ClothesDryer`, `Cleaning` and `NanoexCleaning` have no HVAC mode of
/// their own.
pub static PRESET_TABLE: LookupTable<&str, &str> = LookupTable::new(&[
    ("Auto", "オート"),
    ("Nanoe", "ナノイー送風"),
    ("Blast", "送風"),
    ("Cooling", "冷房"),
    ("Dehumidifying", "ドライ"),
    ("Heating", "暖房"),
    ("CoolDehumidifying", "冷房除湿"),
    ("ClothesDryer", "衣類乾燥"),
    ("KeepMode", "ダブル温度設定"),
    ("Cleaning", "おそうじ"),
    ("NanoexCleaning", "おでかけクリーン"),
    ("Stop", OFF_PRESET),
]);

/// `wind_volume` vendor code to fan speed label. Code 1 is unused.
pub static FAN_TABLE: LookupTable<i64, &str> =
    LookupTable::new(&[(0, "自動"), (2, "1"), (3, "2"), (4, "3"), (5, "4")]);

/// `wind_direction_horizon` vendor key to swing position label.
pub static SWING_TABLE: LookupTable<&str, &str> = LookupTable::new(&[
    ("auto", "自動"),
    ("to_left", "左"),
    ("nearby_left", "ちょっと左"),
    ("front", "中央"),
    ("nearby_right", "ちょっと右"),
    ("to_right", "右"),
]);

/// Localized label of the `Stop` preset.
pub const OFF_PRESET: &str = "オフ";

/// Operation modes in which the unit honours a target temperature.
pub const TEMPERATURE_MODES: [&str; 4] = ["Heating", "Cooling", "Auto", "CoolDehumidifying"];

/// Returns `true` if writes in `operation_mode` carry the target temperature.
#[must_use]
pub fn uses_target_temperature(operation_mode: &str) -> bool {
    TEMPERATURE_MODES.contains(&operation_mode)
}
