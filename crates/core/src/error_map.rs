// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;
use umrah_booking_domain::{FieldError, PassengerErrors, PassengerField};

/// Visible validation errors, keyed by passenger index.
///
/// Keys only ever refer to indices present in the roster. When a passenger
/// is removed, keys above it shift down by one so the map stays aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorMap {
    entries: BTreeMap<usize, PassengerErrors>,
}

impl ValidationErrorMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The errors recorded for a passenger, if any were computed.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PassengerErrors> {
        self.entries.get(&index)
    }

    /// The error recorded for one field of one passenger.
    #[must_use]
    pub fn field(&self, index: usize, field: PassengerField) -> Option<FieldError> {
        self.entries.get(&index).and_then(|errors| errors.get(field))
    }

    /// Records the errors for a passenger.
    pub fn insert(&mut self, index: usize, errors: PassengerErrors) {
        self.entries.insert(index, errors);
    }

    /// Records (or clears) the error for one field of one passenger.
    pub fn set_field(&mut self, index: usize, field: PassengerField, error: Option<FieldError>) {
        self.entries.entry(index).or_default().set(field, error);
    }

    /// Clears the error for one field, if an entry exists for the passenger.
    pub fn clear_field(&mut self, index: usize, field: PassengerField) {
        if let Some(errors) = self.entries.get_mut(&index) {
            errors.set(field, None);
        }
    }

    /// Drops the entry for `index` and shifts every later entry down by one.
    pub fn remove_and_shift(&mut self, index: usize) {
        self.entries = std::mem::take(&mut self.entries)
            .into_iter()
            .filter(|(key, _)| *key != index)
            .map(|(key, errors)| if key > index { (key - 1, errors) } else { (key, errors) })
            .collect();
    }

    /// Drops every entry at or beyond `len`.
    pub fn truncate(&mut self, len: usize) {
        self.entries.retain(|key, _| *key < len);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns whether no passenger has a visible error.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.entries.values().all(PassengerErrors::is_clear)
    }

    /// Number of passengers with an entry (valid or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PassengerErrors)> {
        self.entries.iter().map(|(index, errors)| (*index, errors))
    }
}
