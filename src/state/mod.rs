// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state types.
//!
//! [`RawDeviceState`] is the vendor status document as received,
//! [`ClimateState`] its normalized reading, and [`WritePayload`] the
//! whitelisted body sent back on a write.
//!
//! # Examples
//!
//! ```
//! use eolia_lib::state::{ClimateState, RawDeviceState};
//! use eolia_lib::types::{HvacMode, TargetTemperature};
//!
//! let mut raw = RawDeviceState::new();
//! raw.set_operation_status(true);
//! raw.set_operation_mode("Heating");
//! raw.set("outside_temp", 999);
//!
//! let state = ClimateState::from_raw(&raw, TargetTemperature::INITIAL);
//! assert_eq!(state.mode, HvacMode::Heat);
//! assert_eq!(state.outside_temperature, None);
//! ```

mod climate_state;
mod payload;
mod raw_state;

pub use climate_state::ClimateState;
pub use payload::{WRITABLE_FIELDS, WritePayload};
pub use raw_state::{OUTSIDE_TEMP_UNKNOWN, RawDeviceState, fields};
