// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod command;
mod error;
mod error_map;
mod gateway;
mod presentation;
mod roster;
mod selection;
mod wizard;

#[cfg(test)]
mod tests;

pub use command::WizardCommand;
pub use error::{CoreError, SelectionStep};
pub use error_map::ValidationErrorMap;
pub use gateway::{
    BookingConfirmation, BookingGateway, GENERIC_SUBMISSION_FAILURE, GatewayError,
    PackageSource, Receipt, ReceiptData, ReceiptError, ReceiptRenderer,
};
pub use presentation::{CONFIRMATION_OVERLAY_DURATION, Overlay, ViewState, next_prompt};
pub use roster::PassengerRoster;
pub use selection::SelectionState;
pub use wizard::{BookingWizard, SubmissionPhase, SubmitError, SubmitOutcome};
