// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use umrah_booking_domain::{
    BookingRequest, CatalogRef, PackageCatalog, PackageType, PassengerRecord, UmrahType,
};

use crate::PackageDefinition;

pub fn create_test_passenger(name: &str) -> PassengerRecord {
    PassengerRecord {
        name: String::from(name),
        last_name: String::from("Benali"),
        email: String::from("family@example.com"),
        phone: String::from("+212612345678"),
        health_condition: String::new(),
    }
}

pub fn create_test_request(slug: &str, passengers: &[&str]) -> BookingRequest {
    BookingRequest {
        package_slug: String::from(slug),
        package_type: PackageType::Umrah,
        umrah_type: UmrahType::Collective,
        user_data: passengers.iter().map(|n| create_test_passenger(n)).collect(),
        program: Some(CatalogRef::new("program-a", "Program A")),
        room: Some(CatalogRef::new("twin-room", "Twin Room")),
        visa: Some(CatalogRef::new("umrah-visa", "Umrah Visa")),
    }
}

pub fn create_test_definition(name: &str) -> PackageDefinition {
    PackageDefinition {
        name: String::from(name),
        package_type: PackageType::Umrah,
        umrah_type: UmrahType::Collective,
        catalog: PackageCatalog::fallback(),
    }
}
