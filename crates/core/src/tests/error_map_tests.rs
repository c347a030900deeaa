// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ValidationErrorMap;
use umrah_booking_domain::{FieldError, PassengerErrors, PassengerField};

fn phone_error() -> PassengerErrors {
    let mut errors: PassengerErrors = PassengerErrors::default();
    errors.set(PassengerField::Phone, Some(FieldError::PhoneTooShort));
    errors
}

fn name_error() -> PassengerErrors {
    let mut errors: PassengerErrors = PassengerErrors::default();
    errors.set(PassengerField::Name, Some(FieldError::NameRequired));
    errors
}

#[test]
fn test_empty_map_is_clear() {
    let map: ValidationErrorMap = ValidationErrorMap::new();
    assert!(map.is_clear());
    assert!(map.is_empty());
}

#[test]
fn test_remove_and_shift_reindexes_higher_keys() {
    let mut map: ValidationErrorMap = ValidationErrorMap::new();
    map.insert(0, name_error());
    map.insert(1, phone_error());
    map.insert(2, name_error());
    map.insert(3, phone_error());

    map.remove_and_shift(1);

    assert_eq!(map.len(), 3);
    assert_eq!(map.get(0), Some(&name_error()));
    assert_eq!(map.get(1), Some(&name_error()));
    assert_eq!(map.get(2), Some(&phone_error()));
    assert!(map.get(3).is_none());
}

#[test]
fn test_remove_and_shift_of_missing_key_still_shifts() {
    let mut map: ValidationErrorMap = ValidationErrorMap::new();
    map.insert(0, name_error());
    map.insert(2, phone_error());

    map.remove_and_shift(1);

    assert_eq!(map.get(0), Some(&name_error()));
    assert_eq!(map.get(1), Some(&phone_error()));
    assert!(map.get(2).is_none());
}

#[test]
fn test_truncate_drops_out_of_range_entries() {
    let mut map: ValidationErrorMap = ValidationErrorMap::new();
    map.insert(0, name_error());
    map.insert(1, phone_error());
    map.insert(2, phone_error());

    map.truncate(1);

    assert_eq!(map.len(), 1);
    assert!(map.get(1).is_none());
}

#[test]
fn test_clear_field_only_touches_existing_entries() {
    let mut map: ValidationErrorMap = ValidationErrorMap::new();
    map.clear_field(0, PassengerField::Name);
    assert!(map.is_empty());

    map.insert(0, phone_error());
    map.clear_field(0, PassengerField::Phone);
    assert_eq!(map.field(0, PassengerField::Phone), None);
    assert!(map.is_clear());
}

#[test]
fn test_set_field_creates_entry() {
    let mut map: ValidationErrorMap = ValidationErrorMap::new();
    map.set_field(2, PassengerField::Email, Some(FieldError::EmailInvalid));
    assert_eq!(
        map.field(2, PassengerField::Email),
        Some(FieldError::EmailInvalid)
    );
    assert!(!map.is_clear());
}
