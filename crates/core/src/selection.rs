// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{CoreError, SelectionStep};
use tracing::debug;
use umrah_booking_domain::{CatalogRef, PassengerCount};

/// What the traveler has chosen so far.
///
/// Choices are made in a fixed order: passenger count, program, room, visa.
/// Changing or clearing a choice clears every choice after it, so a room or
/// visa can never outlive the program it was picked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    passenger_count: Option<PassengerCount>,
    program: Option<CatalogRef>,
    room: Option<CatalogRef>,
    visa: Option<CatalogRef>,
}

impl SelectionState {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            passenger_count: None,
            program: None,
            room: None,
            visa: None,
        }
    }

    /// The declared passenger count, if set.
    #[must_use]
    pub const fn passenger_count(&self) -> Option<PassengerCount> {
        self.passenger_count
    }

    /// The selected program, if any.
    #[must_use]
    pub const fn program(&self) -> Option<&CatalogRef> {
        self.program.as_ref()
    }

    /// The selected room type, if any.
    #[must_use]
    pub const fn room(&self) -> Option<&CatalogRef> {
        self.room.as_ref()
    }

    /// The selected visa type, if any.
    #[must_use]
    pub const fn visa(&self) -> Option<&CatalogRef> {
        self.visa.as_ref()
    }

    /// Returns whether program, room and visa are all selected.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.program.is_some() && self.room.is_some() && self.visa.is_some()
    }

    /// Sets the passenger count.
    ///
    /// The count does not gate anything already chosen, so changing it keeps
    /// the program, room and visa.
    pub const fn set_passenger_count(&mut self, count: PassengerCount) {
        self.passenger_count = Some(count);
    }

    /// Selects (or clears, with `None`) the program.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SelectionOutOfOrder` if no passenger count is set.
    pub fn select_program(&mut self, program: Option<CatalogRef>) -> Result<(), CoreError> {
        if program.is_some() && self.passenger_count.is_none() {
            return Err(CoreError::SelectionOutOfOrder {
                attempted: SelectionStep::Program,
                requires: SelectionStep::PassengerCount,
            });
        }

        if self.program != program {
            debug!(program = ?program.as_ref().map(|p| &p.id), "Program changed, clearing room and visa");
            self.room = None;
            self.visa = None;
        }
        self.program = program;
        Ok(())
    }

    /// Selects (or clears, with `None`) the room type.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SelectionOutOfOrder` if no program is selected.
    pub fn select_room(&mut self, room: Option<CatalogRef>) -> Result<(), CoreError> {
        if room.is_some() && self.program.is_none() {
            return Err(CoreError::SelectionOutOfOrder {
                attempted: SelectionStep::Room,
                requires: SelectionStep::Program,
            });
        }

        if self.room != room {
            self.visa = None;
        }
        self.room = room;
        Ok(())
    }

    /// Selects (or clears, with `None`) the visa type.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SelectionOutOfOrder` if no room is selected.
    pub fn select_visa(&mut self, visa: Option<CatalogRef>) -> Result<(), CoreError> {
        if visa.is_some() && self.room.is_none() {
            return Err(CoreError::SelectionOutOfOrder {
                attempted: SelectionStep::Visa,
                requires: SelectionStep::Room,
            });
        }

        self.visa = visa;
        Ok(())
    }
}
