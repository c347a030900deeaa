// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking;
mod catalog;
mod context;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking::BookingRequest;
pub use catalog::{
    CatalogEntry, CatalogRef, ItineraryDay, PackageCatalog, Program, RoomType, VisaType,
};
pub use context::{Currency, Locale, SiteContext};
pub use error::DomainError;
pub use types::{
    BookingStatus, MAX_PASSENGERS, PackageType, PassengerCount, PassengerField, PassengerRecord,
    UmrahType,
};
pub use validation::{
    FieldError, MAX_PHONE_LENGTH, MIN_NAME_LENGTH, MIN_PHONE_LENGTH, PassengerErrors,
    normalize_phone, validate_email, validate_field, validate_last_name, validate_name,
    validate_passenger, validate_phone,
};
