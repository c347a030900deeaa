// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidPassengerCount { count: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid passenger count: 0. Must be between 1 and 50"
    );

    let err: DomainError = DomainError::UnknownField(String::from("age"));
    assert_eq!(format!("{err}"), "Unknown passenger field: 'age'");

    let err: DomainError = DomainError::UnknownLocale(String::from("de"));
    assert_eq!(
        format!("{err}"),
        "Unknown locale 'de'. Must be one of en, fr, ar"
    );

    let err: DomainError = DomainError::UnknownCurrency(String::from("GBP"));
    assert_eq!(
        format!("{err}"),
        "Unknown currency 'GBP'. Must be one of MAD, EUR, USD, SAR"
    );

    let err: DomainError = DomainError::UnknownPackageType(String::from("cruise"));
    assert_eq!(format!("{err}"), "Unknown package type: 'cruise'");

    let err: DomainError = DomainError::UnknownBookingStatus(String::from("lost"));
    assert_eq!(format!("{err}"), "Unknown booking status: 'lost'");
}
