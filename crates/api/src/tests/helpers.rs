// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use umrah_booking_domain::{
    BookingRequest, CatalogRef, PackageCatalog, PackageType, PassengerRecord, UmrahType,
};
use umrah_booking_persistence::Persistence;

use crate::{UpsertPackageRequest, upsert_package};

pub const TEST_SLUG: &str = "umrah-collective-2026";

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_valid_passenger(name: &str) -> PassengerRecord {
    PassengerRecord {
        name: String::from(name),
        last_name: String::from("Benali"),
        email: String::new(),
        phone: String::from("+212 612 345 678"),
        health_condition: String::from("Diabetic"),
    }
}

pub fn create_valid_request() -> BookingRequest {
    BookingRequest {
        package_slug: String::from(TEST_SLUG),
        package_type: PackageType::Umrah,
        umrah_type: UmrahType::Collective,
        user_data: vec![
            create_valid_passenger("Youssef"),
            create_valid_passenger("Fatima"),
        ],
        program: Some(CatalogRef::new("program-a", "Program A")),
        room: Some(CatalogRef::new("twin-room", "Twin Room")),
        visa: Some(CatalogRef::new("umrah-visa", "Umrah Visa")),
    }
}

pub fn create_upsert_request(name: &str) -> UpsertPackageRequest {
    UpsertPackageRequest {
        name: String::from(name),
        package_type: PackageType::Umrah,
        umrah_type: UmrahType::Collective,
        catalog: PackageCatalog::fallback(),
    }
}

pub fn publish_test_package(persistence: &mut Persistence) {
    upsert_package(persistence, TEST_SLUG, create_upsert_request("Umrah 2026")).unwrap();
}
