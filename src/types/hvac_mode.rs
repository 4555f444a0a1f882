// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normalized HVAC operating mode.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Operating mode of the air conditioner, independent of vendor vocabulary.
///
/// # Examples
///
/// ```
/// use eolia_lib::types::HvacMode;
///
/// assert_eq!(HvacMode::FanOnly.as_str(), "fan_only");
/// assert_eq!("cool".parse::<HvacMode>().unwrap(), HvacMode::Cool);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HvacMode {
    /// The unit is stopped.
    #[default]
    Off,
    /// Heating.
    Heat,
    /// Cooling.
    Cool,
    /// The unit picks heating or cooling itself.
    Auto,
    /// Dehumidifying.
    Dry,
    /// Air circulation only.
    FanOnly,
}

impl HvacMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Off,
        Self::Heat,
        Self::Cool,
        Self::Auto,
        Self::Dry,
        Self::FanOnly,
    ];

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::Auto => "auto",
            Self::Dry => "dry",
            Self::FanOnly => "fan_only",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::UnknownMode(s.to_string()))
    }
}
