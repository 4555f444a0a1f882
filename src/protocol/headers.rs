// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request headers expected by the Eolia API.

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderValue};

/// Name of the request timestamp header.
pub const EOLIA_DATE: &str = "x-eolia-date";

/// Content type sent on every request, spelled as the vendor app sends it.
pub const CONTENT_TYPE_VALUE: &str = "application/Json; charset=UTF-8";

const JST_OFFSET_HOURS: i64 = 9;

/// Headers that are identical on every request.
///
/// User-Agent is set on the client separately.
pub(crate) fn static_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_VALUE));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("ja-jp"));
    headers
}

/// Formats `now` as JST wall-clock time in whole seconds, without offset.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use eolia_lib::protocol::eolia_date;
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 31, 20, 15, 30).unwrap();
/// assert_eq!(eolia_date(now), "2024-02-01T05:15:30");
/// ```
#[must_use]
pub fn eolia_date(now: DateTime<Utc>) -> String {
    (now.naive_utc() + TimeDelta::hours(JST_OFFSET_HOURS))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn eolia_date_drops_fraction() {
        let now = Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 5).unwrap()
            + TimeDelta::milliseconds(987);
        assert_eq!(eolia_date(now), "2023-07-01T09:00:05");
    }

    #[test]
    fn eolia_date_crosses_year() {
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 16, 0, 0).unwrap();
        assert_eq!(eolia_date(now), "2024-01-01T01:00:00");
    }

    #[test]
    fn static_headers_values() {
        let headers = static_headers();
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CONTENT_TYPE], "application/Json; charset=UTF-8");
        assert_eq!(headers[ACCEPT_LANGUAGE], "ja-jp");
    }
}
