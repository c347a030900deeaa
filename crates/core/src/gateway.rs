// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborators the wizard talks to: the booking endpoint, the package
//! lookup endpoint, and the receipt renderer.

use async_trait::async_trait;
use time::Date;
use umrah_booking_domain::{
    BookingRequest, CatalogRef, PackageCatalog, PassengerRecord, SiteContext,
};

/// Message shown when the server rejects a booking without saying why.
pub const GENERIC_SUBMISSION_FAILURE: &str = "Booking failed. Please try again.";

/// A booking the server accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    /// Identifier assigned by the server.
    pub booking_id: String,
}

/// Why a booking request did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The server answered with a non-success status.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// The server's error message, if it sent one.
        message: Option<String>,
    },
    /// The request never got a usable answer.
    Transport(String),
}

impl GatewayError {
    /// The text to show the traveler.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. } | Self::Transport(_) => {
                String::from(GENERIC_SUBMISSION_FAILURE)
            }
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { status, message } => {
                write!(
                    f,
                    "Server rejected booking ({status}): {}",
                    message.as_deref().unwrap_or(GENERIC_SUBMISSION_FAILURE)
                )
            }
            Self::Transport(msg) => write!(f, "Booking request failed: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Sends bookings to the booking service.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Submits a booking.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the server rejects the booking or cannot
    /// be reached.
    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, GatewayError>;
}

/// Looks up the catalog of a published package.
#[async_trait]
pub trait PackageSource: Send + Sync {
    /// Fetches the catalog for a package slug. `Ok(None)` means the package
    /// is not published.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the lookup fails.
    async fn package_catalog(&self, slug: &str) -> Result<Option<PackageCatalog>, GatewayError>;
}

/// Everything a receipt shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptData {
    pub booking_id: String,
    pub package_slug: String,
    pub date: Date,
    pub passengers: Vec<PassengerRecord>,
    pub program: CatalogRef,
    pub room: CatalogRef,
    pub visa: CatalogRef,
    /// Per-passenger prices in dirhams for program, room and visa, when the
    /// catalog publishes them.
    pub prices_mad: [Option<u64>; 3],
}

impl ReceiptData {
    /// Total price in dirhams for every passenger, if all three prices are
    /// published.
    #[must_use]
    pub fn total_mad(&self) -> Option<u64> {
        let per_passenger: u64 = self
            .prices_mad
            .iter()
            .copied()
            .try_fold(0_u64, |acc, price| price.and_then(|p| acc.checked_add(p)))?;
        per_passenger.checked_mul(self.passengers.len() as u64)
    }
}

/// A receipt that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptError(pub String);

impl std::fmt::Display for ReceiptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Receipt generation failed: {}", self.0)
    }
}

impl std::error::Error for ReceiptError {}

/// A rendered receipt document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Suggested file name, e.g. `receipt-<id>.pdf`.
    pub file_name: String,
    /// Document bytes.
    pub bytes: Vec<u8>,
}

/// Produces a receipt document for a confirmed booking.
pub trait ReceiptRenderer: Send + Sync {
    /// Renders the receipt.
    ///
    /// # Errors
    ///
    /// Returns a `ReceiptError` if the document cannot be produced.
    fn render(&self, data: &ReceiptData, context: &SiteContext) -> Result<Receipt, ReceiptError>;
}
