// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Immutable bidirectional lookup table.

/// An ordered, immutable mapping between vendor keys and domain values.
///
/// Both directions are linear scans over a small fixed slice, so a table
/// is a plain value that can live in a `static`. Entry order is preserved
/// and is the order in which [`values`](Self::values) lists the domain
/// side.
///
/// # Examples
///
/// ```
/// use eolia_lib::types::LookupTable;
///
/// static TABLE: LookupTable<&str, u8> = LookupTable::new(&[("low", 1), ("high", 2)]);
///
/// assert_eq!(TABLE.get(&"high"), Some(&2));
/// assert_eq!(TABLE.key_of(&1_u8), Some(&"low"));
/// assert_eq!(TABLE.key_of(&3_u8), None);
/// ```
#[derive(Debug)]
pub struct LookupTable<K: 'static, V: 'static> {
    entries: &'static [(K, V)],
}

impl<K, V> LookupTable<K, V> {
    /// Creates a table over the given entries.
    #[must_use]
    pub const fn new(entries: &'static [(K, V)]) -> Self {
        Self { entries }
    }

    /// Forward lookup: vendor key to domain value.
    #[must_use]
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: PartialEq<Q>,
    {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Reverse lookup: the first vendor key whose value equals `value`.
    #[must_use]
    pub fn key_of<Q: ?Sized>(&self, value: &Q) -> Option<&K>
    where
        V: PartialEq<Q>,
    {
        self.entries.iter().find(|(_, v)| v == value).map(|(k, _)| k)
    }

    /// Returns `true` if `key` is a vendor key of this table.
    #[must_use]
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: PartialEq<Q>,
    {
        self.get(key).is_some()
    }

    /// Iterates the vendor keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates the domain values in table order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
