// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate device builder.

use std::time::Duration;

use crate::device::ClimateDevice;
use crate::error::Error;
use crate::protocol::{EoliaConfig, Protocol, Session};

/// Builder for a [`ClimateDevice`] backed by the Eolia cloud.
///
/// # Examples
///
/// ```no_run
/// use eolia_lib::{ClimateDevice, EoliaConfig};
/// use std::time::Duration;
///
/// # async fn example() -> eolia_lib::Result<()> {
/// // Log in and fetch the initial state
/// let device = ClimateDevice::builder(EoliaConfig::new("user@example.com", "secret", "AC-01"))
///     .with_timeout(Duration::from_secs(5))
///     .build()
///     .await?;
///
/// // Defer login until the service asks for it
/// let _lazy = ClimateDevice::builder(EoliaConfig::new("user@example.com", "secret", "AC-01"))
///     .build_without_login()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ClimateDeviceBuilder {
    config: EoliaConfig,
}

impl ClimateDeviceBuilder {
    /// Creates a new builder with the specified configuration.
    pub(crate) fn new(config: EoliaConfig) -> Self {
        Self { config }
    }

    /// Points the client at another API authority.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(base_url);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Returns the configuration the device will be built with.
    #[must_use]
    pub fn config(&self) -> &EoliaConfig {
        &self.config
    }

    /// Logs in and fetches the current status.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The configuration is invalid
    /// - Login is rejected or fails
    /// - The initial status cannot be fetched or decoded
    pub async fn build(self) -> Result<ClimateDevice<Session>, Error> {
        let device = self.build_without_login()?;
        device.protocol().login().await?;
        device.refresh().await?;
        Ok(device)
    }

    /// Builds the device without any network access.
    ///
    /// The first request answered with 401 performs the login.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn build_without_login(self) -> Result<ClimateDevice<Session>, Error> {
        let appliance_id = self.config.credentials().appliance_id().to_string();
        let session = self.config.into_session()?;
        Ok(ClimateDevice::new(session, &appliance_id))
    }
}
