// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{count, test_now};
use crate::{CONFIRMATION_OVERLAY_DURATION, Overlay, SelectionState, ViewState, next_prompt};
use time::Duration;
use umrah_booking_domain::CatalogRef;

#[test]
fn test_view_starts_without_overlay() {
    let view: ViewState = ViewState::new();
    assert_eq!(view.current(), &Overlay::None);
}

#[test]
fn test_opening_replaces_overlay() {
    let mut view: ViewState = ViewState::new();
    view.open(Overlay::ProgramPicker);
    view.open(Overlay::Itinerary {
        program_id: String::from("program-a"),
    });
    assert_eq!(
        view.current(),
        &Overlay::Itinerary {
            program_id: String::from("program-a")
        }
    );
    view.close();
    assert_eq!(view.current(), &Overlay::None);
}

#[test]
fn test_confirmation_dismisses_after_four_seconds() {
    let mut view: ViewState = ViewState::new();
    view.show_confirmation(test_now());

    assert!(!view.tick(test_now() + Duration::seconds(3)));
    assert_eq!(view.current(), &Overlay::Confirmation);

    assert!(view.tick(test_now() + CONFIRMATION_OVERLAY_DURATION));
    assert_eq!(view.current(), &Overlay::None);

    assert!(!view.tick(test_now() + Duration::seconds(10)));
}

#[test]
fn test_tick_ignores_other_overlays() {
    let mut view: ViewState = ViewState::new();
    view.show_confirmation(test_now());
    view.open(Overlay::ProgramPicker);
    assert!(!view.tick(test_now() + Duration::minutes(1)));
    assert_eq!(view.current(), &Overlay::ProgramPicker);
}

#[test]
fn test_next_prompt_follows_selection_order() {
    let mut selection: SelectionState = SelectionState::new();
    assert_eq!(next_prompt(&selection), Overlay::PassengerCount);

    selection.set_passenger_count(count(1));
    assert_eq!(next_prompt(&selection), Overlay::ProgramPicker);

    selection
        .select_program(Some(CatalogRef::new("program-a", "Program A")))
        .unwrap();
    assert_eq!(next_prompt(&selection), Overlay::RoomPicker);

    selection
        .select_room(Some(CatalogRef::new("quad-room", "Quad Room")))
        .unwrap();
    assert_eq!(next_prompt(&selection), Overlay::VisaPicker);

    selection
        .select_visa(Some(CatalogRef::new("umrah-visa", "Umrah Visa")))
        .unwrap();
    assert_eq!(next_prompt(&selection), Overlay::None);
}

#[test]
fn test_overlay_serializes_with_tag() {
    let json: String = serde_json::to_string(&Overlay::Itinerary {
        program_id: String::from("program-b"),
    })
    .unwrap();
    assert_eq!(json, r#"{"overlay":"itinerary","programId":"program-b"}"#);
}
