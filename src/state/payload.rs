// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Body of a status write.

use serde_json::{Map, Value};

use super::raw_state::{RawDeviceState, fields};

/// Fields of the status document the service accepts on a write.
pub const WRITABLE_FIELDS: [&str; 10] = [
    fields::NANOEX,
    fields::OPERATION_STATUS,
    fields::AIRQUALITY,
    fields::WIND_VOLUME,
    fields::TEMPERATURE,
    fields::OPERATION_MODE,
    fields::WIND_DIRECTION,
    fields::TIMER_VALUE,
    fields::AIR_FLOW,
    fields::WIND_DIRECTION_HORIZON,
];

/// A write body: the writable subset of a status document, plus the
/// operation token when one is known.
///
/// # Examples
///
/// ```
/// use eolia_lib::state::{RawDeviceState, WritePayload};
/// use serde_json::json;
///
/// let mut raw = RawDeviceState::new();
/// raw.set_operation_mode("Cooling");
/// raw.set("inside_temp", 27);
///
/// let payload = WritePayload::from_raw(&raw).with_token(Some(&json!("abc")), "AC-01");
/// assert_eq!(
///     payload.into_value(),
///     json!({"operation_mode": "Cooling", "operation_token": "abc", "appliance_id": "AC-01"})
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WritePayload {
    fields: Map<String, Value>,
}

impl WritePayload {
    /// Copies the writable fields out of `raw`, dropping everything else.
    #[must_use]
    pub fn from_raw(raw: &RawDeviceState) -> Self {
        let fields = raw
            .as_map()
            .iter()
            .filter(|(name, _)| WRITABLE_FIELDS.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Self { fields }
    }

    /// Adds `operation_token` and `appliance_id` if a token is known.
    #[must_use]
    pub fn with_token(mut self, token: Option<&Value>, appliance_id: &str) -> Self {
        if let Some(token) = token {
            self.fields
                .insert(fields::OPERATION_TOKEN.to_string(), token.clone());
            self.fields
                .insert(fields::APPLIANCE_ID.to_string(), Value::from(appliance_id));
        }
        self
    }

    /// Returns a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Iterates the field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Converts the payload into a JSON object.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
