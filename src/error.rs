// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Eolia client.
//!
//! This module provides the error hierarchy for the library: session
//! authentication, HTTP transport, response decoding and local value
//! validation.

use thiserror::Error;

/// The main error type for this library.
///
/// Every failure surfaced by the session layer is propagated unchanged
/// through the climate controller to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The service rejected the credentials or the session.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// HTTP transport failed or the service answered with an error status.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A value has no counterpart in the vendor vocabulary.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Errors related to logging in and keeping the session alive.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login endpoint refused the credentials.
    #[error("login rejected with HTTP {status}: {body}")]
    LoginRejected {
        /// HTTP status code returned by the login endpoint.
        status: u16,
        /// Response body, kept for diagnostics.
        body: String,
    },

    /// The request was still unauthorized after logging in again.
    #[error("session rejected after re-authentication")]
    SessionExpired,
}

/// Errors related to HTTP communication with the Eolia service.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be completed (timeout, connection, DNS).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status other than success or 401.
    #[error("unexpected HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, kept for diagnostics.
        body: String,
    },

    /// Invalid base URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to decoding Eolia responses.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body is valid JSON but not the expected shape.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to local value validation.
///
/// These are raised before any network call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The preset label is not in the preset table.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// The fan speed label is not in the fan table.
    #[error("unknown fan speed: {0}")]
    UnknownFanSpeed(String),

    /// The swing position label is not in the swing table.
    #[error("unknown swing position: {0}")]
    UnknownSwingPosition(String),

    /// The string does not name an HVAC mode.
    #[error("unknown HVAC mode: {0}")]
    UnknownMode(String),

    /// The target temperature is NaN or infinite.
    #[error("temperature must be a finite number")]
    NonFiniteTemperature,

    /// The HVAC mode has no vendor key.
    #[error("HVAC mode {0} has no vendor key")]
    UnmappedMode(String),

    /// A required configuration field is empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
