// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{TEST_SLUG, create_test_persistence, create_valid_request, publish_test_package};
use crate::{
    BookingResponse, ErrorResponse, PackageResponse, UpsertPackageRequest, create_booking,
    get_package_by_slug,
};
use serde_json::{Value, json};
use umrah_booking_domain::{PackageType, UmrahType};
use umrah_booking_persistence::Persistence;

#[test]
fn test_package_response_inlines_catalog() {
    let mut persistence: Persistence = create_test_persistence();
    publish_test_package(&mut persistence);
    let response: PackageResponse = get_package_by_slug(&mut persistence, TEST_SLUG).unwrap();

    let value: Value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["package"]["slug"], TEST_SLUG);
    assert_eq!(value["package"]["packageType"], "umrah");
    assert_eq!(value["package"]["umrahType"], "collective");
    assert_eq!(value["package"]["programs"][0]["id"], "program-a");
    assert_eq!(value["package"]["programs"][0]["priceMad"], 16_900);
    assert_eq!(value["package"]["rooms"][2]["id"], "twin-room");
    assert!(value["package"].get("catalog").is_none());
}

#[test]
fn test_missing_package_serializes_as_null() {
    let response: PackageResponse = PackageResponse { package: None };

    assert_eq!(serde_json::to_value(&response).unwrap(), json!({ "package": null }));
}

#[test]
fn test_booking_response_uses_camel_case() {
    let mut persistence: Persistence = create_test_persistence();
    let response: BookingResponse =
        create_booking(&mut persistence, &create_valid_request()).unwrap();

    let value: Value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["booking"]["packageSlug"], TEST_SLUG);
    assert_eq!(value["booking"]["status"], "pending");
    assert_eq!(value["booking"]["userData"][0]["lastName"], "Benali");
    assert_eq!(value["booking"]["room"]["name"], "Twin Room");
    assert!(value["booking"]["createdAt"].is_string());
}

#[test]
fn test_upsert_request_defaults_types_and_catalog() {
    let request: UpsertPackageRequest =
        serde_json::from_value(json!({ "name": "Umrah Ramadan" })).unwrap();

    assert_eq!(request.package_type, PackageType::Umrah);
    assert_eq!(request.umrah_type, UmrahType::Collective);
    assert!(request.catalog.programs.is_empty());
    assert!(!request.catalog.is_complete());
}

#[test]
fn test_error_response_shape() {
    let body: ErrorResponse = ErrorResponse {
        error: String::from("Invalid userData: At least one passenger is required"),
    };

    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "error": "Invalid userData: At least one passenger is required" })
    );
}
