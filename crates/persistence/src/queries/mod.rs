// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `bookings`: booking lookup and listing
//! - `packages`: package lookup and counts

pub mod bookings;
pub mod packages;

pub use bookings::{count_bookings, get_booking, list_bookings};
pub use packages::{count_packages, get_package_by_slug};
