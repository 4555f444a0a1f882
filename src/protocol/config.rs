// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection configuration for the Eolia service.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, HttpError, ValueError};
use crate::protocol::Session;

/// Account credentials and the appliance they control.
///
/// Immutable once a session has been built from them. The password is
/// redacted from the `Debug` output.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
    appliance_id: String,
}

impl Credentials {
    /// Creates a credential set.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        appliance_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            appliance_id: appliance_id.into(),
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the account secret.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the appliance id as supplied.
    #[must_use]
    pub fn appliance_id(&self) -> &str {
        &self.appliance_id
    }

    /// Returns the appliance id percent-encoded for use in a URL path.
    #[must_use]
    pub fn encoded_appliance_id(&self) -> String {
        urlencoding::encode(&self.appliance_id).into_owned()
    }

    /// Checks that every field is non-blank.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyField` naming the first blank field.
    pub fn validate(&self) -> Result<(), ValueError> {
        for (name, value) in [
            ("username", &self.username),
            ("password", &self.password),
            ("appliance_id", &self.appliance_id),
        ] {
            if value.trim().is_empty() {
                return Err(ValueError::EmptyField(name));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("appliance_id", &self.appliance_id)
            .finish()
    }
}

/// Configuration for a connection to the Eolia cloud.
///
/// Can be built in code or deserialized from the host's config store,
/// where only `username`, `password` and `appliance_id` are required.
///
/// # Examples
///
/// ```
/// use eolia_lib::protocol::EoliaConfig;
/// use std::time::Duration;
///
/// let config = EoliaConfig::new("user@example.com", "secret", "AC-01")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "https://app.rac.apws.panasonic.com");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct EoliaConfig {
    #[serde(flatten)]
    credentials: Credentials,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(skip, default = "default_timeout")]
    timeout: Duration,
    #[serde(skip, default = "default_user_agent")]
    user_agent: String,
}

fn default_base_url() -> String {
    EoliaConfig::DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    EoliaConfig::DEFAULT_TIMEOUT
}

fn default_user_agent() -> String {
    EoliaConfig::DEFAULT_USER_AGENT.to_string()
}

impl EoliaConfig {
    /// Production API authority.
    pub const DEFAULT_BASE_URL: &'static str = "https://app.rac.apws.panasonic.com";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// User-Agent of the vendor's iOS application.
    pub const DEFAULT_USER_AGENT: &'static str =
        "%E3%82%A8%E3%82%AA%E3%83%AA%E3%82%A2/38 CFNetwork/1209 Darwin/20.2.0";

    /// Creates a configuration with default endpoint and timeout.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        appliance_id: impl Into<String>,
    ) -> Self {
        Self::from_credentials(Credentials::new(username, password, appliance_id))
    }

    /// Creates a configuration from an existing credential set.
    #[must_use]
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: default_base_url(),
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }

    /// Points the client at another API authority (e.g. a test server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the credentials.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the User-Agent header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Creates a [`Session`] from this configuration.
    ///
    /// No request is made; call [`Session::login`] or let the first 401
    /// trigger it.
    ///
    /// # Errors
    ///
    /// Returns error if a credential field is blank, the base URL is not
    /// HTTP(S), or the HTTP client cannot be created.
    pub fn into_session(self) -> Result<Session, Error> {
        self.credentials.validate()?;

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(HttpError::InvalidAddress(self.base_url).into());
        }

        Session::new(self)
    }
}
