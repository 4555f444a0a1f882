// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for the Eolia cloud API.
//!
//! - [`EoliaConfig`]: endpoint, credentials and timeout
//! - [`Session`]: cookie-backed HTTP session with bounded re-authentication
//! - [`Protocol`]: the operations the climate controller needs from a transport

mod config;
mod headers;
mod session;

pub use config::{Credentials, EoliaConfig};
pub use headers::{CONTENT_TYPE_VALUE, EOLIA_DATE, eolia_date};
pub use session::{LOGIN_PATH, Session};

use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::{DecodeError, Error};

/// Successful response from the Eolia API.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    /// Creates a response with the given status and body.
    #[must_use]
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, DecodeError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }

    /// Parses the response as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns error if the body is not JSON or is JSON but not an object.
    pub fn json_object(&self) -> Result<Map<String, Value>, DecodeError> {
        match self.parse::<Value>()? {
            Value::Object(map) => Ok(map),
            other => Err(DecodeError::UnexpectedFormat(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }
}

/// Path of the status resource of an appliance.
///
/// `encoded_appliance_id` must already be percent-encoded.
#[must_use]
pub fn status_path(encoded_appliance_id: &str) -> String {
    format!("/eolia/v2/devices/{encoded_appliance_id}/status")
}

/// Operations a transport must provide to the climate controller.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Logs in with the configured credentials.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::LoginRejected` if the service refuses the
    /// credentials, or `HttpError` if the request cannot be completed.
    async fn login(&self) -> Result<(), Error>;

    /// Sends an authenticated request and returns the successful response.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Path below the API authority
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionExpired` if the request is still
    /// unauthorized after one re-login, and `HttpError` for transport
    /// failures or any other non-success status.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, Error>;
}
