// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target temperature type.
//!
//! The requested value is kept as given; clamping to the unit's supported
//! range happens when a write is prepared.

use std::fmt;

use crate::error::ValueError;

/// Requested target temperature in degrees Celsius.
///
/// # Examples
///
/// ```
/// use eolia_lib::types::TargetTemperature;
///
/// let temp = TargetTemperature::new(40.0).unwrap();
/// assert_eq!(temp.value(), 40.0);
/// assert_eq!(temp.clamped().value(), 30.0);
/// assert_eq!(temp.clamped().to_wire(), "30.0");
///
/// assert!(TargetTemperature::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TargetTemperature(f64);

impl TargetTemperature {
    /// Lowest temperature the unit accepts.
    pub const MIN: Self = Self(16.0);

    /// Highest temperature the unit accepts.
    pub const MAX: Self = Self(30.0);

    /// Granularity of the unit's temperature setting.
    pub const STEP: f64 = 0.5;

    /// Target assumed before the service has reported one.
    pub const INITIAL: Self = Self(25.0);

    /// Creates a target temperature.
    ///
    /// Out-of-range values are accepted here; see [`clamped`](Self::clamped).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFiniteTemperature` for NaN or infinite input.
    pub fn new(celsius: f64) -> Result<Self, ValueError> {
        if celsius.is_finite() {
            Ok(Self(celsius))
        } else {
            Err(ValueError::NonFiniteTemperature)
        }
    }

    /// Returns the temperature in degrees Celsius.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns this temperature limited to [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self(self.0.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Formats the value the way the `temperature` field expects it.
    ///
    /// Whole numbers keep one decimal place (`"16.0"`).
    #[must_use]
    pub fn to_wire(&self) -> String {
        if self.0.fract() == 0.0 {
            format!("{:.1}", self.0)
        } else {
            self.0.to_string()
        }
    }
}

impl Default for TargetTemperature {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for TargetTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.to_wire())
    }
}

impl TryFrom<f64> for TargetTemperature {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_low_and_high() {
        assert_eq!(TargetTemperature::new(10.0).unwrap().clamped(), TargetTemperature::MIN);
        assert_eq!(TargetTemperature::new(40.0).unwrap().clamped(), TargetTemperature::MAX);
        assert_eq!(TargetTemperature::new(22.5).unwrap().clamped().value(), 22.5);
    }

    #[test]
    fn wire_format() {
        assert_eq!(TargetTemperature::MIN.to_wire(), "16.0");
        assert_eq!(TargetTemperature::new(22.5).unwrap().to_wire(), "22.5");
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(
            TargetTemperature::new(f64::INFINITY),
            Err(ValueError::NonFiniteTemperature)
        );
    }

    #[test]
    fn display() {
        assert_eq!(TargetTemperature::INITIAL.to_string(), "25.0°C");
    }
}
