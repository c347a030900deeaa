// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Every DTO is camelCase on the wire.

use serde::{Deserialize, Serialize};
use umrah_booking_domain::{
    BookingStatus, CatalogRef, PackageCatalog, PackageType, PassengerRecord, UmrahType,
};
use umrah_booking_persistence::{BookingData, PackageData};

/// A stored booking as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInfo {
    /// The server-assigned booking id.
    pub id: String,
    pub package_slug: String,
    pub package_type: PackageType,
    pub umrah_type: UmrahType,
    pub user_data: Vec<PassengerRecord>,
    pub program: Option<CatalogRef>,
    pub room: Option<CatalogRef>,
    pub visa: Option<CatalogRef>,
    pub status: BookingStatus,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl From<BookingData> for BookingInfo {
    fn from(data: BookingData) -> Self {
        Self {
            id: data.booking_id,
            package_slug: data.package_slug,
            package_type: data.package_type,
            umrah_type: data.umrah_type,
            user_data: data.user_data,
            program: data.program,
            room: data.room,
            visa: data.visa,
            status: data.status,
            created_at: data.created_at,
        }
    }
}

/// Response carrying a single booking (`POST /api/bookings`,
/// `GET /api/bookings/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking: BookingInfo,
}

/// Response listing bookings, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBookingsResponse {
    pub bookings: Vec<BookingInfo>,
}

/// A published package and its catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub slug: String,
    pub name: String,
    pub package_type: PackageType,
    pub umrah_type: UmrahType,
    /// Programs, rooms and visas, inlined.
    #[serde(flatten)]
    pub catalog: PackageCatalog,
}

impl From<PackageData> for PackageInfo {
    fn from(data: PackageData) -> Self {
        Self {
            slug: data.slug,
            name: data.name,
            package_type: data.package_type,
            umrah_type: data.umrah_type,
            catalog: data.catalog,
        }
    }
}

/// Response to a package lookup. `package` is `null` for unknown slugs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageResponse {
    pub package: Option<PackageInfo>,
}

/// API request to create or replace a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPackageRequest {
    pub name: String,
    #[serde(default)]
    pub package_type: PackageType,
    #[serde(default)]
    pub umrah_type: UmrahType,
    #[serde(flatten)]
    pub catalog: PackageCatalog,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
