// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::WizardCommand;
use crate::error::{CoreError, SelectionStep};
use crate::gateway::{
    BookingConfirmation, BookingGateway, GatewayError, PackageSource, Receipt, ReceiptData,
    ReceiptError, ReceiptRenderer,
};
use crate::presentation::{Overlay, ViewState, next_prompt};
use crate::roster::PassengerRoster;
use crate::selection::SelectionState;
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use umrah_booking_domain::{
    BookingRequest, CatalogEntry, CatalogRef, PackageCatalog, PackageType, PassengerCount,
    PassengerField, SiteContext, UmrahType,
};

/// Where the booking is in its submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    /// The server accepted the booking. The wizard no longer changes.
    Confirmed {
        booking_id: String,
    },
}

/// What a call to `BookingWizard::submit` achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The booking had already been confirmed; nothing was sent.
    AlreadyConfirmed {
        booking_id: String,
    },
    /// Passenger data is invalid. The errors are visible on the roster.
    Invalid,
    /// The server accepted the booking.
    ///
    /// The receipt is rendered separately; a failed receipt does not undo
    /// the booking.
    Confirmed {
        booking_id: String,
        receipt: Result<Receipt, ReceiptError>,
    },
}

/// Why a submission did not produce a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The wizard was not ready to submit.
    Wizard(CoreError),
    /// The server refused the booking.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message to show the traveler.
        message: String,
    },
    /// The server could not be reached.
    Transport(String),
}

impl SubmitError {
    /// The text to show the traveler.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Wizard(err) => err.to_string(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Transport(_) => String::from(crate::gateway::GENERIC_SUBMISSION_FAILURE),
        }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wizard(err) => write!(f, "{err}"),
            Self::Rejected { status, message } => {
                write!(f, "Booking rejected ({status}): {message}")
            }
            Self::Transport(msg) => write!(f, "Booking request failed: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<CoreError> for SubmitError {
    fn from(err: CoreError) -> Self {
        Self::Wizard(err)
    }
}

impl From<GatewayError> for SubmitError {
    fn from(err: GatewayError) -> Self {
        let message: String = err.user_message();
        match err {
            GatewayError::Rejected { status, .. } => Self::Rejected { status, message },
            GatewayError::Transport(msg) => Self::Transport(msg),
        }
    }
}

/// The collective Umrah booking flow for one package.
///
/// The wizard owns the traveler's selections, the passenger roster, the
/// overlay state and the submission phase. All mutation goes through
/// `&mut self`, so one wizard never has two submissions in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWizard {
    package_slug: String,
    catalog: PackageCatalog,
    selection: SelectionState,
    roster: PassengerRoster,
    view: ViewState,
    phase: SubmissionPhase,
    submit_attempted: bool,
}

impl BookingWizard {
    /// Creates a wizard over a known catalog. The passenger count prompt is
    /// shown first.
    #[must_use]
    pub fn with_catalog(package_slug: impl Into<String>, catalog: PackageCatalog) -> Self {
        let mut view: ViewState = ViewState::new();
        view.open(Overlay::PassengerCount);
        Self {
            package_slug: package_slug.into(),
            catalog,
            selection: SelectionState::new(),
            roster: PassengerRoster::new(),
            view,
            phase: SubmissionPhase::Idle,
            submit_attempted: false,
        }
    }

    /// Creates a wizard, fetching the package catalog from `source`.
    ///
    /// A missing package, an empty catalog or a failed lookup all fall back
    /// to `PackageCatalog::fallback()`.
    pub async fn load_catalog(package_slug: impl Into<String>, source: &dyn PackageSource) -> Self {
        let package_slug: String = package_slug.into();
        let catalog: PackageCatalog = match source.package_catalog(&package_slug).await {
            Ok(Some(catalog)) if catalog.is_complete() => {
                info!(slug = %package_slug, "Loaded package catalog");
                catalog
            }
            Ok(Some(_)) => {
                warn!(slug = %package_slug, "Package catalog is incomplete, using built-in catalog");
                PackageCatalog::fallback()
            }
            Ok(None) => {
                warn!(slug = %package_slug, "Package not found, using built-in catalog");
                PackageCatalog::fallback()
            }
            Err(err) => {
                warn!(slug = %package_slug, error = %err, "Package lookup failed, using built-in catalog");
                PackageCatalog::fallback()
            }
        };
        Self::with_catalog(package_slug, catalog)
    }

    #[must_use]
    pub fn package_slug(&self) -> &str {
        &self.package_slug
    }

    #[must_use]
    pub const fn catalog(&self) -> &PackageCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub const fn roster(&self) -> &PassengerRoster {
        &self.roster
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub const fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// Returns whether the traveler has tried to submit at least once.
    #[must_use]
    pub const fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// The booking id, once confirmed.
    #[must_use]
    pub fn booking_id(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Confirmed { booking_id } => Some(booking_id),
            _ => None,
        }
    }

    /// Declares how many travelers are booking.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or above `MAX_PASSENGERS`, or the
    /// booking is confirmed.
    pub fn set_passenger_count(&mut self, count: u32) -> Result<(), CoreError> {
        self.ensure_editable()?;
        let count: PassengerCount = PassengerCount::new(count)?;
        info!(count = count.get(), "Passenger count set");
        self.selection.set_passenger_count(count);
        self.sync_roster();
        self.advance_prompt();
        Ok(())
    }

    /// Selects (or clears) a program by catalog id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown, the passenger count is not set,
    /// or the booking is confirmed.
    pub fn select_program(&mut self, id: Option<&str>) -> Result<(), CoreError> {
        self.ensure_editable()?;
        let program: Option<CatalogRef> = self.resolve(SelectionStep::Program, id)?;
        self.selection.select_program(program)?;
        self.advance_prompt();
        Ok(())
    }

    /// Selects (or clears) a room type by catalog id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown, no program is selected, or the
    /// booking is confirmed.
    pub fn select_room(&mut self, id: Option<&str>) -> Result<(), CoreError> {
        self.ensure_editable()?;
        let room: Option<CatalogRef> = self.resolve(SelectionStep::Room, id)?;
        self.selection.select_room(room)?;
        self.sync_roster();
        self.advance_prompt();
        Ok(())
    }

    /// Selects (or clears) a visa type by catalog id.
    ///
    /// Completing the selection sizes the roster to the passenger count.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown, no room is selected, or the
    /// booking is confirmed.
    pub fn select_visa(&mut self, id: Option<&str>) -> Result<(), CoreError> {
        self.ensure_editable()?;
        let visa: Option<CatalogRef> = self.resolve(SelectionStep::Visa, id)?;
        self.selection.select_visa(visa)?;
        self.sync_roster();
        self.advance_prompt();
        Ok(())
    }

    /// Appends an empty passenger and returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking form is not available.
    pub fn add_passenger(&mut self) -> Result<usize, CoreError> {
        self.ensure_form_available()?;
        let index: usize = self.roster.add_passenger();
        debug!(index, "Passenger added");
        self.revalidate();
        Ok(index)
    }

    /// Removes a passenger beyond the declared count.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking form is not available, the index is
    /// unknown, or the roster is already at the declared count.
    pub fn delete_passenger(&mut self, index: usize) -> Result<(), CoreError> {
        self.ensure_form_available()?;
        self.roster
            .delete_passenger(index, self.selection.passenger_count())?;
        debug!(index, "Passenger removed");
        self.revalidate();
        Ok(())
    }

    /// Types into a passenger field.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking form is not available or the index is
    /// unknown.
    pub fn update_field(
        &mut self,
        index: usize,
        field: PassengerField,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.ensure_form_available()?;
        self.roster.update_field(index, field, value.into())?;
        self.revalidate();
        Ok(())
    }

    /// Validates one field after it loses focus.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking form is not available or the index is
    /// unknown.
    pub fn blur_field(&mut self, index: usize, field: PassengerField) -> Result<(), CoreError> {
        self.ensure_form_available()?;
        self.roster.validate_field(index, field)?;
        Ok(())
    }

    /// Opens a passenger for editing.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking form is not available or the index is
    /// unknown.
    pub fn begin_editing(&mut self, index: usize) -> Result<(), CoreError> {
        self.ensure_form_available()?;
        self.roster.begin_editing(index)
    }

    /// Closes the passenger being edited.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking form is not available.
    pub fn finish_editing(&mut self) -> Result<(), CoreError> {
        self.ensure_form_available()?;
        self.roster.finish_editing();
        Ok(())
    }

    /// Shows an overlay.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownCatalogEntry` when asked for the itinerary
    /// of a program the catalog does not offer.
    pub fn open_overlay(&mut self, overlay: Overlay) -> Result<(), CoreError> {
        match &overlay {
            Overlay::Itinerary { program_id } if self.catalog.program(program_id).is_none() => {
                return Err(CoreError::UnknownCatalogEntry {
                    step: SelectionStep::Program,
                    id: program_id.clone(),
                });
            }
            _ => {}
        }
        self.view.open(overlay);
        Ok(())
    }

    /// Hides the visible overlay.
    pub fn close_overlay(&mut self) {
        self.view.close();
    }

    /// Advances the clock, dismissing the confirmation when its time is up.
    ///
    /// Returns `true` if an overlay was dismissed.
    pub fn tick(&mut self, now: OffsetDateTime) -> bool {
        self.view.tick(now)
    }

    /// Applies a command.
    ///
    /// # Errors
    ///
    /// Returns the error of the operation the command maps to.
    pub fn apply(&mut self, command: WizardCommand) -> Result<(), CoreError> {
        match command {
            WizardCommand::SetPassengerCount { count } => self.set_passenger_count(count),
            WizardCommand::SelectProgram { id } => self.select_program(id.as_deref()),
            WizardCommand::SelectRoom { id } => self.select_room(id.as_deref()),
            WizardCommand::SelectVisa { id } => self.select_visa(id.as_deref()),
            WizardCommand::AddPassenger => self.add_passenger().map(|_| ()),
            WizardCommand::DeletePassenger { index } => self.delete_passenger(index),
            WizardCommand::UpdateField {
                index,
                field,
                value,
            } => self.update_field(index, field, value),
            WizardCommand::BlurField { index, field } => self.blur_field(index, field),
            WizardCommand::BeginEditing { index } => self.begin_editing(index),
            WizardCommand::FinishEditing => self.finish_editing(),
            WizardCommand::OpenOverlay { overlay } => self.open_overlay(overlay),
            WizardCommand::CloseOverlay => {
                self.close_overlay();
                Ok(())
            }
        }
    }

    /// Builds the payload `submit` would send.
    #[must_use]
    pub fn build_request(&self) -> BookingRequest {
        BookingRequest {
            package_slug: self.package_slug.clone(),
            package_type: PackageType::Umrah,
            umrah_type: UmrahType::Collective,
            user_data: self.roster.passengers().to_vec(),
            program: self.selection.program().cloned(),
            room: self.selection.room().cloned(),
            visa: self.selection.visa().cloned(),
        }
    }

    /// Validates the roster, sends the booking and renders the receipt.
    ///
    /// Once confirmed, further calls return `SubmitOutcome::AlreadyConfirmed`
    /// without contacting the gateway. Failures leave the wizard editable.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Wizard` if the selection is not configured, and
    /// `SubmitError::Rejected` or `SubmitError::Transport` if the gateway
    /// fails.
    pub async fn submit(
        &mut self,
        gateway: &dyn BookingGateway,
        renderer: &dyn ReceiptRenderer,
        context: &SiteContext,
        now: OffsetDateTime,
    ) -> Result<SubmitOutcome, SubmitError> {
        if let SubmissionPhase::Confirmed { booking_id } = &self.phase {
            info!(booking_id = %booking_id, "Booking already confirmed, ignoring submit");
            return Ok(SubmitOutcome::AlreadyConfirmed {
                booking_id: booking_id.clone(),
            });
        }
        if !self.selection.is_configured() {
            return Err(SubmitError::Wizard(CoreError::NotConfigured));
        }

        self.submit_attempted = true;
        self.phase = SubmissionPhase::Validating;
        if !self.roster.validate_all(self.selection.passenger_count()) {
            warn!(
                passengers = self.roster.len(),
                "Booking has invalid passenger data"
            );
            self.phase = SubmissionPhase::Idle;
            return Ok(SubmitOutcome::Invalid);
        }

        let request: BookingRequest = self.build_request();
        self.phase = SubmissionPhase::Submitting;
        info!(
            slug = %request.package_slug,
            passengers = request.user_data.len(),
            "Submitting booking"
        );

        let confirmation: BookingConfirmation = match gateway.create_booking(&request).await {
            Ok(confirmation) => confirmation,
            Err(err) => {
                warn!(error = %err, "Booking submission failed");
                self.phase = SubmissionPhase::Idle;
                return Err(err.into());
            }
        };

        let booking_id: String = confirmation.booking_id;
        info!(booking_id = %booking_id, "Booking confirmed");
        self.phase = SubmissionPhase::Confirmed {
            booking_id: booking_id.clone(),
        };
        self.roster.finish_editing();
        self.view.show_confirmation(now);

        let receipt: Result<Receipt, ReceiptError> = self
            .receipt_data(&booking_id, now)
            .and_then(|data| renderer.render(&data, context));
        if let Err(err) = &receipt {
            warn!(booking_id = %booking_id, error = %err, "Receipt could not be rendered");
        }

        Ok(SubmitOutcome::Confirmed {
            booking_id,
            receipt,
        })
    }

    /// Collects what the receipt shows.
    ///
    /// # Errors
    ///
    /// Returns a `ReceiptError` if the selection is incomplete.
    pub fn receipt_data(
        &self,
        booking_id: &str,
        now: OffsetDateTime,
    ) -> Result<ReceiptData, ReceiptError> {
        let (Some(program), Some(room), Some(visa)) = (
            self.selection.program(),
            self.selection.room(),
            self.selection.visa(),
        ) else {
            return Err(ReceiptError(String::from(
                "program, room and visa must be selected",
            )));
        };

        Ok(ReceiptData {
            booking_id: booking_id.to_owned(),
            package_slug: self.package_slug.clone(),
            date: now.date(),
            passengers: self.roster.passengers().to_vec(),
            program: program.clone(),
            room: room.clone(),
            visa: visa.clone(),
            prices_mad: [
                self.catalog.program(&program.id).and_then(CatalogEntry::price_mad),
                self.catalog.room(&room.id).and_then(CatalogEntry::price_mad),
                self.catalog.visa(&visa.id).and_then(CatalogEntry::price_mad),
            ],
        })
    }

    fn resolve(
        &self,
        step: SelectionStep,
        id: Option<&str>,
    ) -> Result<Option<CatalogRef>, CoreError> {
        let Some(id) = id else {
            return Ok(None);
        };
        let found: Option<CatalogRef> = match step {
            SelectionStep::Program => self.catalog.program(id).map(CatalogEntry::to_ref),
            SelectionStep::Room => self.catalog.room(id).map(CatalogEntry::to_ref),
            SelectionStep::Visa => self.catalog.visa(id).map(CatalogEntry::to_ref),
            SelectionStep::PassengerCount => None,
        };
        found.map(Some).ok_or_else(|| CoreError::UnknownCatalogEntry {
            step,
            id: id.to_owned(),
        })
    }

    /// Sizes the roster once the selection is configured.
    fn sync_roster(&mut self) {
        if !self.selection.is_configured() {
            return;
        }
        if let Some(count) = self.selection.passenger_count() {
            self.roster.resize_to(count);
            self.revalidate();
        }
    }

    /// Moves a picker overlay along to the next step.
    fn advance_prompt(&mut self) {
        let on_picker: bool = matches!(
            self.view.current(),
            Overlay::PassengerCount
                | Overlay::ProgramPicker
                | Overlay::RoomPicker
                | Overlay::VisaPicker
        );
        if on_picker {
            self.view.open(next_prompt(&self.selection));
        }
    }

    /// After the first submit attempt, every roster change re-runs full
    /// validation.
    fn revalidate(&mut self) {
        if self.submit_attempted {
            self.roster.validate_all(self.selection.passenger_count());
        }
    }

    fn ensure_editable(&self) -> Result<(), CoreError> {
        if matches!(self.phase, SubmissionPhase::Confirmed { .. }) {
            return Err(CoreError::AlreadyConfirmed);
        }
        Ok(())
    }

    fn ensure_form_available(&self) -> Result<(), CoreError> {
        self.ensure_editable()?;
        if !self.selection.is_configured() {
            return Err(CoreError::NotConfigured);
        }
        Ok(())
    }
}
