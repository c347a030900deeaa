// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::presentation::Overlay;
use serde::{Deserialize, Serialize};
use umrah_booking_domain::PassengerField;

/// A command represents traveler intent as data only.
///
/// Commands are replayed against a wizard with `BookingWizard::apply`.
/// Catalog selections name entries by id; `None` clears the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum WizardCommand {
    /// Declare how many travelers are booking.
    SetPassengerCount {
        /// The number of travelers (must be positive).
        count: u32,
    },
    /// Choose or clear the program.
    SelectProgram {
        /// Catalog id of the program.
        id: Option<String>,
    },
    /// Choose or clear the room type.
    SelectRoom {
        /// Catalog id of the room type.
        id: Option<String>,
    },
    /// Choose or clear the visa type.
    SelectVisa {
        /// Catalog id of the visa type.
        id: Option<String>,
    },
    /// Append an empty passenger form.
    AddPassenger,
    /// Remove a passenger form.
    DeletePassenger {
        /// Roster index.
        index: usize,
    },
    /// Type into a passenger field.
    UpdateField {
        /// Roster index.
        index: usize,
        /// The field being edited.
        field: PassengerField,
        /// The new text.
        value: String,
    },
    /// A passenger field lost focus.
    BlurField {
        /// Roster index.
        index: usize,
        /// The field that lost focus.
        field: PassengerField,
    },
    /// Expand a passenger for editing.
    BeginEditing {
        /// Roster index.
        index: usize,
    },
    /// Collapse the passenger being edited.
    FinishEditing,
    /// Show an overlay.
    OpenOverlay {
        /// The overlay to show.
        overlay: Overlay,
    },
    /// Hide the visible overlay.
    CloseOverlay,
}
