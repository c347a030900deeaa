// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use umrah_booking_domain::DomainError;

/// The wizard step a selection depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStep {
    PassengerCount,
    Program,
    Room,
    Visa,
}

impl std::fmt::Display for SelectionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = match self {
            Self::PassengerCount => "passenger count",
            Self::Program => "program",
            Self::Room => "room",
            Self::Visa => "visa",
        };
        write!(f, "{label}")
    }
}

/// Errors that can occur while operating the booking wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A selection was made before the step it depends on.
    SelectionOutOfOrder {
        /// The step being selected.
        attempted: SelectionStep,
        /// The step that must be completed first.
        requires: SelectionStep,
    },
    /// The booking form was used before program, room and visa were chosen.
    NotConfigured,
    /// The roster cannot shrink below the declared passenger count.
    RosterAtMinimum {
        /// The declared passenger count.
        passenger_count: u32,
    },
    /// A passenger index does not exist in the roster.
    PassengerIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The roster length.
        len: usize,
    },
    /// A selection referred to an id the catalog does not offer.
    UnknownCatalogEntry {
        /// The catalog step.
        step: SelectionStep,
        /// The unknown id.
        id: String,
    },
    /// The booking was already confirmed; the wizard is frozen.
    AlreadyConfirmed,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SelectionOutOfOrder {
                attempted,
                requires,
            } => {
                write!(f, "Cannot select {attempted} before {requires}")
            }
            Self::NotConfigured => {
                write!(f, "Program, room and visa must be selected first")
            }
            Self::RosterAtMinimum { passenger_count } => {
                write!(
                    f,
                    "Cannot remove passenger: booking requires {passenger_count} passenger(s)"
                )
            }
            Self::PassengerIndexOutOfRange { index, len } => {
                write!(
                    f,
                    "Passenger index {index} out of range (roster has {len} passenger(s))"
                )
            }
            Self::UnknownCatalogEntry { step, id } => {
                write!(f, "Unknown {step} '{id}'")
            }
            Self::AlreadyConfirmed => write!(f, "Booking is already confirmed"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
