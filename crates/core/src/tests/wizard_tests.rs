// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{FixedPackageSource, TEST_SLUG, configured_wizard};
use crate::{BookingWizard, CoreError, GatewayError, Overlay, SelectionStep, SubmissionPhase};
use umrah_booking_domain::{
    BookingRequest, CatalogRef, PackageCatalog, PackageType, PassengerField, PassengerRecord,
    UmrahType,
};

fn single_program_catalog() -> PackageCatalog {
    let mut catalog: PackageCatalog = PackageCatalog::fallback();
    catalog.programs.truncate(1);
    catalog.programs[0].name = String::from("Ramadan Program");
    catalog
}

#[test]
fn test_new_wizard_prompts_for_passenger_count() {
    let wizard: BookingWizard =
        BookingWizard::with_catalog(TEST_SLUG, PackageCatalog::fallback());
    assert_eq!(wizard.view().current(), &Overlay::PassengerCount);
    assert_eq!(wizard.phase(), &SubmissionPhase::Idle);
    assert!(wizard.roster().is_empty());
}

#[test]
fn test_pickers_advance_with_each_selection() {
    let mut wizard: BookingWizard =
        BookingWizard::with_catalog(TEST_SLUG, PackageCatalog::fallback());
    wizard.set_passenger_count(2).unwrap();
    assert_eq!(wizard.view().current(), &Overlay::ProgramPicker);
    wizard.select_program(Some("program-a")).unwrap();
    assert_eq!(wizard.view().current(), &Overlay::RoomPicker);
    wizard.select_room(Some("twin-room")).unwrap();
    assert_eq!(wizard.view().current(), &Overlay::VisaPicker);
    wizard.select_visa(Some("umrah-visa")).unwrap();
    assert_eq!(wizard.view().current(), &Overlay::None);
}

#[test]
fn test_configuration_sizes_roster_to_count() {
    for n in 1..=5 {
        let wizard: BookingWizard = configured_wizard(n);
        assert_eq!(wizard.roster().len(), n as usize);
        assert!(
            wizard
                .roster()
                .passengers()
                .iter()
                .all(|p| *p == PassengerRecord::empty())
        );
    }
}

#[test]
fn test_roster_waits_for_configuration() {
    let mut wizard: BookingWizard =
        BookingWizard::with_catalog(TEST_SLUG, PackageCatalog::fallback());
    wizard.set_passenger_count(3).unwrap();
    wizard.select_program(Some("program-a")).unwrap();
    wizard.select_room(Some("quad-room")).unwrap();
    assert!(wizard.roster().is_empty());
}

#[test]
fn test_changing_count_after_configuration_resizes() {
    let mut wizard: BookingWizard = configured_wizard(2);
    wizard
        .update_field(0, PassengerField::Name, "Youssef")
        .unwrap();
    wizard.set_passenger_count(4).unwrap();
    assert_eq!(wizard.roster().len(), 4);
    assert_eq!(wizard.roster().passenger(0).unwrap().name, "Youssef");
}

#[test]
fn test_changing_program_clears_room_and_visa() {
    let mut wizard: BookingWizard = configured_wizard(1);
    wizard.select_program(Some("program-b")).unwrap();
    assert!(wizard.selection().room().is_none());
    assert!(wizard.selection().visa().is_none());
    assert!(!wizard.selection().is_configured());
}

#[test]
fn test_selection_resolves_names_from_catalog() {
    let mut wizard: BookingWizard =
        BookingWizard::with_catalog(TEST_SLUG, single_program_catalog());
    wizard.set_passenger_count(1).unwrap();
    wizard.select_program(Some("program-a")).unwrap();
    assert_eq!(
        wizard.selection().program(),
        Some(&CatalogRef::new("program-a", "Ramadan Program"))
    );
    let result: Result<(), CoreError> = wizard.select_program(Some("program-b"));
    assert!(matches!(
        result,
        Err(CoreError::UnknownCatalogEntry {
            step: SelectionStep::Program,
            ..
        })
    ));
}

#[test]
fn test_form_requires_configuration() {
    let mut wizard: BookingWizard =
        BookingWizard::with_catalog(TEST_SLUG, PackageCatalog::fallback());
    wizard.set_passenger_count(1).unwrap();
    assert_eq!(wizard.add_passenger(), Err(CoreError::NotConfigured));
    assert_eq!(
        wizard.update_field(0, PassengerField::Name, "Youssef"),
        Err(CoreError::NotConfigured)
    );
}

#[test]
fn test_delete_blocked_at_declared_count() {
    let mut wizard: BookingWizard = configured_wizard(2);
    assert_eq!(
        wizard.delete_passenger(0),
        Err(CoreError::RosterAtMinimum { passenger_count: 2 })
    );
    let extra: usize = wizard.add_passenger().unwrap();
    assert_eq!(extra, 2);
    assert!(wizard.delete_passenger(extra).is_ok());
    assert_eq!(wizard.roster().len(), 2);
}

#[test]
fn test_blur_shows_field_error() {
    let mut wizard: BookingWizard = configured_wizard(1);
    wizard.update_field(0, PassengerField::Phone, "123").unwrap();
    wizard.blur_field(0, PassengerField::Phone).unwrap();
    assert!(
        wizard
            .roster()
            .errors()
            .field(0, PassengerField::Phone)
            .is_some()
    );
    assert!(
        wizard
            .roster()
            .errors()
            .field(0, PassengerField::Name)
            .is_none()
    );
}

#[test]
fn test_itinerary_overlay_requires_known_program() {
    let mut wizard: BookingWizard =
        BookingWizard::with_catalog(TEST_SLUG, PackageCatalog::fallback());
    wizard
        .open_overlay(Overlay::Itinerary {
            program_id: String::from("program-b"),
        })
        .unwrap();
    assert!(
        wizard
            .open_overlay(Overlay::Itinerary {
                program_id: String::from("program-x"),
            })
            .is_err()
    );
    wizard.close_overlay();
    assert_eq!(wizard.view().current(), &Overlay::None);
}

#[test]
fn test_build_request_carries_selection_and_roster() {
    let wizard: BookingWizard = configured_wizard(2);
    let request: BookingRequest = wizard.build_request();
    assert_eq!(request.package_slug, TEST_SLUG);
    assert_eq!(request.package_type, PackageType::Umrah);
    assert_eq!(request.umrah_type, UmrahType::Collective);
    assert_eq!(request.user_data.len(), 2);
    assert_eq!(request.program.unwrap().name, "Program A");
    assert_eq!(request.room.unwrap().name, "Twin Room");
    assert_eq!(request.visa.unwrap().name, "Umrah Visa");
}

#[tokio::test]
async fn test_load_catalog_uses_published_package() {
    let source: FixedPackageSource = FixedPackageSource(Ok(Some(single_program_catalog())));
    let wizard: BookingWizard = BookingWizard::load_catalog(TEST_SLUG, &source).await;
    assert_eq!(wizard.catalog().programs.len(), 1);
    assert_eq!(wizard.catalog().programs[0].name, "Ramadan Program");
}

#[tokio::test]
async fn test_load_catalog_falls_back_when_missing() {
    let source: FixedPackageSource = FixedPackageSource(Ok(None));
    let wizard: BookingWizard = BookingWizard::load_catalog(TEST_SLUG, &source).await;
    assert_eq!(wizard.catalog(), &PackageCatalog::fallback());
}

#[tokio::test]
async fn test_load_catalog_falls_back_on_error() {
    let source: FixedPackageSource =
        FixedPackageSource(Err(GatewayError::Transport(String::from("refused"))));
    let wizard: BookingWizard = BookingWizard::load_catalog(TEST_SLUG, &source).await;
    assert_eq!(wizard.catalog(), &PackageCatalog::fallback());
}

#[tokio::test]
async fn test_load_catalog_falls_back_when_incomplete() {
    let mut catalog: PackageCatalog = PackageCatalog::fallback();
    catalog.visas.clear();
    let source: FixedPackageSource = FixedPackageSource(Ok(Some(catalog)));
    let wizard: BookingWizard = BookingWizard::load_catalog(TEST_SLUG, &source).await;
    assert_eq!(wizard.catalog(), &PackageCatalog::fallback());
}
