// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Eolia Lib - A Rust client for Panasonic Eolia air conditioners.
//!
//! This library observes and controls an Eolia appliance through the
//! vendor's cloud API, the same one the mobile application uses.
//!
//! # Supported Features
//!
//! - **Session handling**: Cookie-based login with one transparent re-login
//!   when the session expires
//! - **State**: Mode, preset, fan speed, swing position, target and room
//!   temperature, humidity, outdoor temperature, timer
//! - **Commands**: Read-modify-write updates that send only the fields the
//!   service accepts, echoing the operation token it issued
//!
//! Discovery of appliance ids and periodic polling are left to the caller;
//! [`ClimateDevice::SCAN_INTERVAL`] is the suggested refresh period.
//!
//! # Quick Start
//!
//! ```no_run
//! use eolia_lib::{ClimateDevice, EoliaConfig, HvacMode};
//!
//! #[tokio::main]
//! async fn main() -> eolia_lib::Result<()> {
//!     // Logs in and fetches the current status
//!     let device = ClimateDevice::builder(EoliaConfig::new("user@example.com", "secret", "AC-01"))
//!         .build()
//!         .await?;
//!
//!     device.set_mode(HvacMode::Heat).await?;
//!     device.set_target_temperature(21.5).await?;
//!     device.set_fan_speed("2").await?;
//!
//!     let state = device.refresh().await?;
//!     println!("{:?} at {:?} °C", state.mode, state.current_temperature);
//!     Ok(())
//! }
//! ```

mod device;
pub mod error;
pub mod protocol;
pub mod state;
pub mod types;

pub use device::{ClimateDevice, ClimateDeviceBuilder};
pub use error::{AuthError, DecodeError, Error, HttpError, Result, ValueError};
pub use protocol::{ApiResponse, Credentials, EoliaConfig, Protocol, Session};
pub use state::{ClimateState, RawDeviceState, WritePayload};
pub use types::{HvacMode, LookupTable, TargetTemperature};
