// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `bookings`: booking creation
//! - `packages`: package upsert

pub mod bookings;
pub mod packages;

pub use bookings::insert_booking;
pub use packages::upsert_package;
