// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types and vendor vocabularies.
//!
//! # Types
//!
//! - [`HvacMode`] - Normalized operating mode
//! - [`TargetTemperature`] - Requested temperature, clamped to 16-30 °C on write
//! - [`LookupTable`] - Immutable vendor key to value mapping
//!
//! The [`tables`] module holds the fixed mode, preset, fan and swing tables.

mod hvac_mode;
mod lookup;
pub mod tables;
mod temperature;

pub use hvac_mode::HvacMode;
pub use lookup::LookupTable;
pub use temperature::TargetTemperature;
