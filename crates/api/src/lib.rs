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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_persistence_error};
pub use handlers::{
    create_booking, get_booking, get_package_by_slug, list_bookings, upsert_package,
    validate_slug,
};
pub use request_response::{
    BookingInfo, BookingResponse, ErrorResponse, ListBookingsResponse, PackageInfo,
    PackageResponse, UpsertPackageRequest,
};
