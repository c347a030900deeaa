// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Which overlay the booking page is showing.

use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

/// How long the booking confirmation stays on screen.
pub const CONFIRMATION_OVERLAY_DURATION: Duration = Duration::seconds(4);

/// The modal overlays of the booking page. Only one is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "overlay", rename_all = "camelCase")]
pub enum Overlay {
    #[default]
    None,
    PassengerCount,
    ProgramPicker,
    RoomPicker,
    VisaPicker,
    /// Day-by-day detail of one program.
    #[serde(rename_all = "camelCase")]
    Itinerary {
        program_id: String,
    },
    Confirmation,
}

/// Overlay state of the booking page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    overlay: Overlay,
    confirmation_shown_at: Option<OffsetDateTime>,
}

impl ViewState {
    /// Creates a view with no overlay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            overlay: Overlay::None,
            confirmation_shown_at: None,
        }
    }

    /// The visible overlay.
    #[must_use]
    pub const fn current(&self) -> &Overlay {
        &self.overlay
    }

    /// Shows an overlay, replacing whichever one was open.
    pub fn open(&mut self, overlay: Overlay) {
        self.confirmation_shown_at = None;
        self.overlay = overlay;
    }

    /// Hides the visible overlay.
    pub fn close(&mut self) {
        self.open(Overlay::None);
    }

    /// Shows the booking confirmation, starting its auto-dismiss timer.
    pub fn show_confirmation(&mut self, now: OffsetDateTime) {
        self.overlay = Overlay::Confirmation;
        self.confirmation_shown_at = Some(now);
    }

    /// Advances the clock. The confirmation hides itself once its time is up.
    ///
    /// Returns `true` if an overlay was dismissed.
    pub fn tick(&mut self, now: OffsetDateTime) -> bool {
        match self.confirmation_shown_at {
            Some(shown_at)
                if self.overlay == Overlay::Confirmation
                    && now - shown_at >= CONFIRMATION_OVERLAY_DURATION =>
            {
                self.close();
                true
            }
            _ => false,
        }
    }
}

/// The picker the flow needs next, given what is already chosen.
///
/// Returns `Overlay::None` once the selection is configured.
#[must_use]
pub const fn next_prompt(selection: &SelectionState) -> Overlay {
    if selection.passenger_count().is_none() {
        Overlay::PassengerCount
    } else if selection.program().is_none() {
        Overlay::ProgramPicker
    } else if selection.room().is_none() {
        Overlay::RoomPicker
    } else if selection.visa().is_none() {
        Overlay::VisaPicker
    } else {
        Overlay::None
    }
}
