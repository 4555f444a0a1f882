// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authenticated HTTP session against the Eolia cloud.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use chrono::Utc;
use reqwest::{Client, Method, StatusCode};
use serde_json::{Value, json};

use crate::error::{AuthError, DecodeError, Error, HttpError};
use crate::protocol::config::{Credentials, EoliaConfig};
use crate::protocol::headers::{EOLIA_DATE, eolia_date, static_headers};
use crate::protocol::{ApiResponse, Protocol};

/// Path of the login endpoint.
pub const LOGIN_PATH: &str = "/eolia/v2/auth/login";

/// `terminal_type` the vendor app identifies itself with.
const TERMINAL_TYPE: u8 = 3;

/// HTTP session holding the login state for one account.
///
/// The server keeps the session in cookies, which the underlying client
/// stores and replays. A 401 on any request triggers exactly one new login
/// followed by exactly one retry of the same request.
///
/// # Examples
///
/// ```no_run
/// use eolia_lib::protocol::{EoliaConfig, Protocol};
/// use reqwest::Method;
///
/// # async fn example() -> eolia_lib::Result<()> {
/// let session = EoliaConfig::new("user@example.com", "secret", "AC-01").into_session()?;
/// session.login().await?;
/// let response = session
///     .request(Method::GET, "/eolia/v2/devices/AC-01/status", None)
///     .await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Session {
    base_url: String,
    client: Client,
    credentials: Credentials,
    authenticated: AtomicBool,
    logins: AtomicU32,
}

impl Session {
    /// Maximum number of re-logins per request.
    pub const MAX_REAUTH: u32 = 1;

    pub(crate) fn new(config: EoliaConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .default_headers(static_headers())
            .cookie_store(true)
            .build()
            .map_err(HttpError::Transport)?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            client,
            credentials: config.credentials().clone(),
            authenticated: AtomicBool::new(false),
            logins: AtomicU32::new(0),
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the credentials this session logs in with.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns `true` if the last login succeeded and no 401 has been seen since.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Acquire)
    }

    /// Returns the number of successful logins so far.
    #[must_use]
    pub fn login_count(&self) -> u32 {
        self.logins.load(Ordering::Acquire)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn login_body(&self) -> Value {
        json!({
            "idpw": {
                "id": self.credentials.username(),
                "pass": self.credentials.password(),
                "terminal_type": TERMINAL_TYPE,
                "next_easy": "true",
            }
        })
    }

    /// Sends one request without any retry.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(StatusCode, String), Error> {
        let mut request = self
            .client
            .request(method, self.url(path))
            .header(EOLIA_DATE, eolia_date(Utc::now()));

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body).map_err(DecodeError::Json)?);
        }

        let response = request.send().await.map_err(HttpError::Transport)?;
        let status = response.status();
        let text = response.text().await.map_err(HttpError::Transport)?;

        tracing::debug!(status = status.as_u16(), body = %text, "Received Eolia response");

        Ok((status, text))
    }
}

impl Protocol for Session {
    async fn login(&self) -> Result<(), Error> {
        tracing::debug!(
            path = LOGIN_PATH,
            username = %self.credentials.username(),
            "Logging in"
        );

        self.authenticated.store(false, Ordering::Release);
        let (status, body) = self
            .send(Method::POST, LOGIN_PATH, Some(&self.login_body()))
            .await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Login rejected");
            return Err(AuthError::LoginRejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        self.authenticated.store(true, Ordering::Release);
        self.logins.fetch_add(1, Ordering::AcqRel);
        tracing::info!(username = %self.credentials.username(), "Logged in to Eolia");
        Ok(())
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, Error> {
        if let Some(body) = body {
            tracing::debug!(method = %method, path, body = %body, "Sending Eolia request");
        } else {
            tracing::debug!(method = %method, path, "Sending Eolia request");
        }

        let mut reauths = 0;
        loop {
            let (status, text) = self.send(method.clone(), path, body).await?;

            if status == StatusCode::UNAUTHORIZED {
                self.authenticated.store(false, Ordering::Release);
                if reauths >= Self::MAX_REAUTH {
                    tracing::warn!(path, "Still unauthorized after re-login");
                    return Err(AuthError::SessionExpired.into());
                }
                reauths += 1;
                tracing::warn!(path, "Session expired, logging in again");
                self.login().await?;
                continue;
            }

            if !status.is_success() {
                return Err(HttpError::Status {
                    status: status.as_u16(),
                    body: text,
                }
                .into());
            }

            return Ok(ApiResponse::new(status.as_u16(), text));
        }
    }
}
