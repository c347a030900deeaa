// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BookingConfirmation, BookingGateway, BookingWizard, GatewayError, PackageSource, Receipt,
    ReceiptData, ReceiptError, ReceiptRenderer,
};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use time::OffsetDateTime;
use time::macros::datetime;
use umrah_booking_domain::{
    BookingRequest, PackageCatalog, PassengerCount, PassengerField, PassengerRecord, SiteContext,
};

pub const TEST_SLUG: &str = "umrah-collective-2026";

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-03-01 10:00 UTC)
}

pub fn count(n: u32) -> PassengerCount {
    PassengerCount::new(n).unwrap()
}

pub fn valid_passenger(name: &str) -> PassengerRecord {
    PassengerRecord {
        name: String::from(name),
        last_name: String::from("Benali"),
        email: String::new(),
        phone: String::from("+212612345678"),
        health_condition: String::new(),
    }
}

/// A wizard over the built-in catalog with count, Program A, Twin Room and
/// Umrah Visa chosen.
pub fn configured_wizard(passengers: u32) -> BookingWizard {
    let mut wizard: BookingWizard =
        BookingWizard::with_catalog(TEST_SLUG, PackageCatalog::fallback());
    wizard.set_passenger_count(passengers).unwrap();
    wizard.select_program(Some("program-a")).unwrap();
    wizard.select_room(Some("twin-room")).unwrap();
    wizard.select_visa(Some("umrah-visa")).unwrap();
    wizard
}

/// Fills every passenger of the wizard with valid data.
pub fn fill_all(wizard: &mut BookingWizard) {
    let names: [&str; 4] = ["Youssef", "Fatima", "Omar", "Khadija"];
    for index in 0..wizard.roster().len() {
        let record: PassengerRecord = valid_passenger(names[index % names.len()]);
        wizard
            .update_field(index, PassengerField::Name, record.name)
            .unwrap();
        wizard
            .update_field(index, PassengerField::LastName, record.last_name)
            .unwrap();
        wizard
            .update_field(index, PassengerField::Phone, record.phone)
            .unwrap();
    }
}

/// Records every booking request and answers with a fixed result.
pub struct RecordingGateway {
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<BookingRequest>>,
    response: Result<String, GatewayError>,
}

impl RecordingGateway {
    pub fn accepting(booking_id: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            response: Ok(String::from(booking_id)),
        }
    }

    pub fn failing(error: GatewayError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            response: Err(error),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<BookingRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl BookingGateway for RecordingGateway {
    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone().map(|booking_id| BookingConfirmation { booking_id })
    }
}

/// Answers package lookups with a fixed result.
pub struct FixedPackageSource(pub Result<Option<PackageCatalog>, GatewayError>);

#[async_trait]
impl PackageSource for FixedPackageSource {
    async fn package_catalog(&self, _slug: &str) -> Result<Option<PackageCatalog>, GatewayError> {
        self.0.clone()
    }
}

/// Renders a plain-text receipt so tests can inspect its content.
pub struct TextRenderer;

impl ReceiptRenderer for TextRenderer {
    fn render(&self, data: &ReceiptData, context: &SiteContext) -> Result<Receipt, ReceiptError> {
        let body: String = format!(
            "{} {} {} {} {} {}",
            data.booking_id,
            data.program.name,
            data.room.name,
            data.visa.name,
            data.passengers.len(),
            context.currency.code()
        );
        Ok(Receipt {
            file_name: format!("receipt-{}.pdf", data.booking_id),
            bytes: body.into_bytes(),
        })
    }
}

/// Always fails to render.
pub struct BrokenRenderer;

impl ReceiptRenderer for BrokenRenderer {
    fn render(&self, _data: &ReceiptData, _context: &SiteContext) -> Result<Receipt, ReceiptError> {
        Err(ReceiptError(String::from("font unavailable")))
    }
}
