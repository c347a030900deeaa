// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking plans: a whole wizard session described as JSON.
//!
//! A plan names the package and either lists passengers with the program,
//! room and visa ids to book, or spells out raw wizard commands, or both.
//! Shorthand fields expand to commands first; explicit commands run after.
//!
//! ```json
//! {
//!   "packageSlug": "umrah-collective-2026",
//!   "program": "program-a",
//!   "room": "twin-room",
//!   "visa": "umrah-visa",
//!   "passengers": [
//!     { "name": "Youssef", "lastName": "Benali", "phone": "+212612345678" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use umrah_booking::{
    BookingGateway, BookingWizard, PackageSource, Receipt, ReceiptError, ReceiptRenderer,
    SubmitOutcome, WizardCommand,
};
use umrah_booking_domain::{PassengerField, PassengerRecord, SiteContext};

use crate::error::PlanError;

/// A scripted booking session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPlan {
    pub package_slug: String,
    /// Program id to select.
    #[serde(default)]
    pub program: Option<String>,
    /// Room type id to select.
    #[serde(default)]
    pub room: Option<String>,
    /// Visa type id to select.
    #[serde(default)]
    pub visa: Option<String>,
    /// One record per traveler. Sets the passenger count when non-empty.
    #[serde(default)]
    pub passengers: Vec<PassengerRecord>,
    /// Commands replayed after the shorthand fields.
    #[serde(default)]
    pub commands: Vec<WizardCommand>,
}

impl BookingPlan {
    /// Expands the plan into the commands a traveler would issue.
    #[must_use]
    pub fn to_commands(&self) -> Vec<WizardCommand> {
        let mut commands: Vec<WizardCommand> = Vec::new();

        if !self.passengers.is_empty() {
            commands.push(WizardCommand::SetPassengerCount {
                count: u32::try_from(self.passengers.len()).unwrap_or(u32::MAX),
            });
        }
        if let Some(id) = &self.program {
            commands.push(WizardCommand::SelectProgram {
                id: Some(id.clone()),
            });
        }
        if let Some(id) = &self.room {
            commands.push(WizardCommand::SelectRoom {
                id: Some(id.clone()),
            });
        }
        if let Some(id) = &self.visa {
            commands.push(WizardCommand::SelectVisa {
                id: Some(id.clone()),
            });
        }

        for (index, passenger) in self.passengers.iter().enumerate() {
            for field in PassengerField::ALL {
                let value: &str = passenger.field(field);
                if !value.is_empty() {
                    commands.push(WizardCommand::UpdateField {
                        index,
                        field,
                        value: value.to_string(),
                    });
                }
            }
        }

        commands.extend(self.commands.iter().cloned());
        commands
    }
}

/// A booking the plan produced.
#[derive(Debug)]
pub struct PlanOutcome {
    pub booking_id: String,
    /// The rendered receipt, or why it could not be produced.
    pub receipt: Result<Receipt, ReceiptError>,
}

/// Runs a plan end to end: loads the package catalog, replays the plan's
/// commands, and submits the booking.
///
/// # Errors
///
/// Returns `PlanError::Command` if the wizard refuses a step,
/// `PlanError::InvalidPassengers` with one message per failing field, and
/// `PlanError::Submit` if the booking is not accepted.
pub async fn execute_plan(
    plan: &BookingPlan,
    source: &dyn PackageSource,
    gateway: &dyn BookingGateway,
    renderer: &dyn ReceiptRenderer,
    context: &SiteContext,
) -> Result<PlanOutcome, PlanError> {
    let mut wizard: BookingWizard =
        BookingWizard::load_catalog(plan.package_slug.clone(), source).await;

    for (step, command) in plan.to_commands().into_iter().enumerate() {
        debug!(step, ?command, "Applying plan step");
        let name: String = command_name(&command);
        wizard
            .apply(command)
            .map_err(|source| PlanError::Command {
                step,
                command: name,
                source,
            })?;
    }

    match wizard
        .submit(gateway, renderer, context, OffsetDateTime::now_utc())
        .await?
    {
        SubmitOutcome::Confirmed {
            booking_id,
            receipt,
        } => {
            info!(booking_id = %booking_id, "Plan booked");
            Ok(PlanOutcome {
                booking_id,
                receipt,
            })
        }
        SubmitOutcome::AlreadyConfirmed { booking_id } => Ok(PlanOutcome {
            receipt: Err(ReceiptError(format!(
                "booking {booking_id} was already confirmed"
            ))),
            booking_id,
        }),
        SubmitOutcome::Invalid => {
            let messages: Vec<String> = invalid_passenger_messages(&wizard, context);
            warn!(failures = messages.len(), "Plan has invalid passenger data");
            Err(PlanError::InvalidPassengers(messages))
        }
    }
}

fn invalid_passenger_messages(wizard: &BookingWizard, context: &SiteContext) -> Vec<String> {
    let mut messages: Vec<String> = wizard
        .roster()
        .errors()
        .iter()
        .flat_map(|(index, errors)| {
            errors.errors().into_iter().map(move |error| {
                format!(
                    "passenger {} {}: {}",
                    index + 1,
                    error.field(),
                    error.message(context.locale)
                )
            })
        })
        .collect();

    if messages.is_empty() {
        let declared: u32 = wizard
            .selection()
            .passenger_count()
            .map_or(0, |count| count.get());
        messages.push(format!(
            "{} passenger forms for {declared} declared travelers",
            wizard.roster().len()
        ));
    }
    messages
}

fn command_name(command: &WizardCommand) -> String {
    serde_json::to_value(command)
        .ok()
        .and_then(|value| value.get("command").and_then(|c| c.as_str().map(String::from)))
        .unwrap_or_else(|| String::from("unknown"))
}
