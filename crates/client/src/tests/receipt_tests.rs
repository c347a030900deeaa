// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::valid_passenger;
use crate::receipt::latin1;
use crate::{PdfReceiptRenderer, receipt_file_name};
use time::macros::date;
use umrah_booking::{Receipt, ReceiptData, ReceiptRenderer};
use umrah_booking_domain::{CatalogRef, Currency, Locale, PassengerRecord, SiteContext};

fn receipt_data(passengers: Vec<PassengerRecord>) -> ReceiptData {
    ReceiptData {
        booking_id: String::from("0b5c7d1e-4a3f-4b8e-9c2d-1f6a7e8b9c0d"),
        package_slug: String::from("umrah-collective-2026"),
        date: date!(2026 - 03 - 01),
        passengers,
        program: CatalogRef::new("program-a", "Program A"),
        room: CatalogRef::new("twin-room", "Twin Room"),
        visa: CatalogRef::new("umrah-visa", "Umrah Visa"),
        prices_mad: [Some(16_900), Some(2_500), Some(1_500)],
    }
}

#[test]
fn test_renders_pdf_named_after_booking() {
    let data: ReceiptData = receipt_data(vec![
        valid_passenger("Youssef"),
        valid_passenger("Fatima"),
    ]);

    let receipt: Receipt = PdfReceiptRenderer
        .render(&data, &SiteContext::default())
        .unwrap();

    assert_eq!(
        receipt.file_name,
        "receipt-0b5c7d1e-4a3f-4b8e-9c2d-1f6a7e8b9c0d.pdf"
    );
    assert!(receipt.bytes.starts_with(b"%PDF"));
}

#[test]
fn test_renders_every_locale_and_currency() {
    let mut passenger: PassengerRecord = valid_passenger("Amina");
    passenger.email = String::from("amina@example.com");
    passenger.health_condition = String::from("Asthme");
    let data: ReceiptData = receipt_data(vec![passenger]);

    for locale in [Locale::En, Locale::Fr, Locale::Ar] {
        for currency in [Currency::Mad, Currency::Eur, Currency::Usd, Currency::Sar] {
            let receipt: Receipt = PdfReceiptRenderer
                .render(&data, &SiteContext::new(locale, currency))
                .unwrap();
            assert!(!receipt.bytes.is_empty(), "{locale} {currency}");
        }
    }
}

#[test]
fn test_long_roster_spills_onto_more_pages() {
    let passengers: Vec<PassengerRecord> = (0..60).map(|_| valid_passenger("Omar")).collect();
    let short: Receipt = PdfReceiptRenderer
        .render(&receipt_data(vec![valid_passenger("Omar")]), &SiteContext::default())
        .unwrap();

    let long: Receipt = PdfReceiptRenderer
        .render(&receipt_data(passengers), &SiteContext::default())
        .unwrap();

    assert!(long.bytes.len() > short.bytes.len());
}

#[test]
fn test_unpriced_selection_still_renders() {
    let mut data: ReceiptData = receipt_data(vec![valid_passenger("Youssef")]);
    data.prices_mad = [Some(16_900), None, Some(1_500)];

    assert_eq!(data.total_mad(), None);
    assert!(PdfReceiptRenderer.render(&data, &SiteContext::default()).is_ok());
}

#[test]
fn test_latin1_keeps_accents_and_replaces_other_scripts() {
    assert_eq!(latin1("Réservation à Médine"), "Réservation à Médine");
    assert_eq!(latin1("يوسف Benali"), "???? Benali");
    assert_eq!(latin1("tab\there"), "tab?here");
}

#[test]
fn test_receipt_file_name() {
    assert_eq!(receipt_file_name("abc"), "receipt-abc.pdf");
    assert_eq!(
        receipt_file_name("9b2f6c1e-41d2-4c3a-a1f0-3d5e7b8c9a10"),
        "receipt-9b2f6c1e-41d2-4c3a-a1f0-3d5e7b8c9a10.pdf"
    );
}

#[test]
fn test_receipt_file_name_keeps_server_ids_inside_the_directory() {
    assert_eq!(receipt_file_name("../x"), "receipt-___x.pdf");
    assert_eq!(receipt_file_name("a/b\\c"), "receipt-a_b_c.pdf");
    assert!(!receipt_file_name("/etc/passwd").contains('/'));
}
