// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use umrah_booking_domain::{
    BookingStatus, CatalogRef, PackageCatalog, PackageType, PassengerRecord, UmrahType,
};

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingData {
    /// Server-assigned UUID.
    pub booking_id: String,
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

/// A published package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageData {
    pub slug: String,
    pub name: String,
    pub package_type: PackageType,
    pub umrah_type: UmrahType,
    pub catalog: PackageCatalog,
    pub created_at: String,
    pub updated_at: String,
}

/// The editable part of a package, as supplied to an upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDefinition {
    pub name: String,
    pub package_type: PackageType,
    pub umrah_type: UmrahType,
    pub catalog: PackageCatalog,
}
