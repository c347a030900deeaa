// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::CatalogRef;
use crate::types::{PackageType, PassengerRecord, UmrahType};
use crate::validation::{PassengerErrors, validate_passenger};
use serde::{Deserialize, Serialize};

/// The booking payload posted to `POST /api/bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Slug of the package being booked.
    pub package_slug: String,
    pub package_type: PackageType,
    pub umrah_type: UmrahType,
    /// One record per traveler.
    pub user_data: Vec<PassengerRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<CatalogRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<CatalogRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa: Option<CatalogRef>,
}

impl BookingRequest {
    /// Validates every passenger and returns the failures by index.
    ///
    /// An empty result means every passenger is valid.
    #[must_use]
    pub fn passenger_errors(&self) -> Vec<(usize, PassengerErrors)> {
        self.user_data
            .iter()
            .enumerate()
            .map(|(index, record)| (index, validate_passenger(record)))
            .filter(|(_, errors)| !errors.is_clear())
            .collect()
    }
}
