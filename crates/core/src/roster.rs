// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::error_map::ValidationErrorMap;
use tracing::debug;
use umrah_booking_domain::{
    FieldError, PassengerCount, PassengerErrors, PassengerField, PassengerRecord,
    validate_field, validate_passenger,
};

/// The ordered list of travelers being booked, with their visible errors.
///
/// At most one passenger is open for editing at a time; the others are shown
/// collapsed once their required fields are filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassengerRoster {
    passengers: Vec<PassengerRecord>,
    errors: ValidationErrorMap,
    editing: Option<usize>,
}

impl PassengerRoster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            passengers: Vec::new(),
            errors: ValidationErrorMap::new(),
            editing: None,
        }
    }

    /// The passengers, in order.
    #[must_use]
    pub fn passengers(&self) -> &[PassengerRecord] {
        &self.passengers
    }

    /// One passenger.
    #[must_use]
    pub fn passenger(&self, index: usize) -> Option<&PassengerRecord> {
        self.passengers.get(index)
    }

    /// Number of passengers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    /// Returns whether the roster has no passengers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// The visible validation errors.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrorMap {
        &self.errors
    }

    /// The passenger currently open for editing.
    #[must_use]
    pub const fn editing_index(&self) -> Option<usize> {
        self.editing
    }

    /// Sizes the roster to exactly `count` passengers.
    ///
    /// Nothing changes when the length already matches, so existing entries
    /// survive repeated calls. Growing appends empty records; shrinking drops
    /// passengers from the end together with their errors.
    pub fn resize_to(&mut self, count: PassengerCount) {
        let target: usize = count.as_len();
        if self.passengers.len() == target {
            return;
        }

        debug!(from = self.passengers.len(), to = target, "Resizing roster");
        self.passengers.resize_with(target, PassengerRecord::empty);
        self.errors.truncate(target);
        if self.editing.is_some_and(|index| index >= target) {
            self.editing = None;
        }
    }

    /// Appends one empty passenger and returns its index.
    ///
    /// The roster may grow beyond the declared passenger count.
    pub fn add_passenger(&mut self) -> usize {
        self.passengers.push(PassengerRecord::empty());
        self.passengers.len() - 1
    }

    /// Removes a passenger.
    ///
    /// Removal is only allowed while the roster is longer than the declared
    /// count, or when no count is declared. Errors and the editing pointer are
    /// re-indexed so they keep pointing at the same travelers.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the roster would
    /// shrink below the declared count.
    pub fn delete_passenger(
        &mut self,
        index: usize,
        declared: Option<PassengerCount>,
    ) -> Result<PassengerRecord, CoreError> {
        self.check_index(index)?;

        if let Some(count) = declared.filter(|count| self.passengers.len() <= count.as_len()) {
            return Err(CoreError::RosterAtMinimum {
                passenger_count: count.get(),
            });
        }

        let removed: PassengerRecord = self.passengers.remove(index);
        self.errors.remove_and_shift(index);
        self.editing = match self.editing {
            Some(current) if current == index => None,
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
        Ok(removed)
    }

    /// Changes one field of one passenger.
    ///
    /// Any visible error on that field is cleared; it is recomputed on the
    /// next blur or full validation.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::PassengerIndexOutOfRange` for an unknown index.
    pub fn update_field(
        &mut self,
        index: usize,
        field: PassengerField,
        value: String,
    ) -> Result<(), CoreError> {
        self.check_index(index)?;
        debug!(index, field = %field, "Updating passenger field");
        self.passengers[index].set_field(field, value);
        self.errors.clear_field(index, field);
        Ok(())
    }

    /// Recomputes the visible error for one field (the field lost focus).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::PassengerIndexOutOfRange` for an unknown index.
    pub fn validate_field(
        &mut self,
        index: usize,
        field: PassengerField,
    ) -> Result<Option<FieldError>, CoreError> {
        self.check_index(index)?;
        let error: Option<FieldError> = validate_field(&self.passengers[index], field);
        self.errors.set_field(index, field, error);
        Ok(error)
    }

    /// Returns whether a passenger's required fields are all filled.
    ///
    /// Unknown indices are never filled.
    #[must_use]
    pub fn is_passenger_filled(&self, index: usize) -> bool {
        self.passengers
            .get(index)
            .is_some_and(PassengerRecord::is_filled)
    }

    /// Validates the whole roster against the declared passenger count.
    ///
    /// A roster whose length differs from the declared count (or with no
    /// declared count) is invalid as a whole: the visible errors are cleared
    /// and `false` is returned. Otherwise every passenger is validated, the
    /// error map is replaced, and the result says whether all are valid.
    pub fn validate_all(&mut self, declared: Option<PassengerCount>) -> bool {
        let Some(count) = declared else {
            self.errors.clear();
            return false;
        };
        if self.passengers.len() != count.as_len() {
            self.errors.clear();
            return false;
        }

        let mut errors: ValidationErrorMap = ValidationErrorMap::new();
        for (index, record) in self.passengers.iter().enumerate() {
            let passenger_errors: PassengerErrors = validate_passenger(record);
            errors.insert(index, passenger_errors);
        }
        let valid: bool = errors.is_clear();
        self.errors = errors;
        valid
    }

    /// Opens one passenger for editing, closing any other.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::PassengerIndexOutOfRange` for an unknown index.
    pub fn begin_editing(&mut self, index: usize) -> Result<(), CoreError> {
        self.check_index(index)?;
        self.editing = Some(index);
        Ok(())
    }

    /// Closes the passenger being edited.
    pub const fn finish_editing(&mut self) {
        self.editing = None;
    }

    fn check_index(&self, index: usize) -> Result<(), CoreError> {
        if index >= self.passengers.len() {
            return Err(CoreError::PassengerIndexOutOfRange {
                index,
                len: self.passengers.len(),
            });
        }
        Ok(())
    }
}
