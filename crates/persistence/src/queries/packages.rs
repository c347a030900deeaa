// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use umrah_booking_domain::{DomainError, PackageCatalog};

use crate::data_models::PackageData;
use crate::diesel_schema::packages;
use crate::error::PersistenceError;

/// Diesel Queryable struct for package rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = packages)]
struct PackageRow {
    slug: String,
    name: String,
    package_type: String,
    umrah_type: String,
    catalog_json: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<PackageRow> for PackageData {
    type Error = PersistenceError;

    fn try_from(row: PackageRow) -> Result<Self, Self::Error> {
        let corrupt = |e: DomainError| PersistenceError::CorruptRecord {
            table: "packages",
            reason: e.to_string(),
        };
        let catalog: PackageCatalog = serde_json::from_str(&row.catalog_json)?;

        Ok(Self {
            package_type: row.package_type.parse().map_err(corrupt)?,
            umrah_type: row.umrah_type.parse().map_err(corrupt)?,
            slug: row.slug,
            name: row.name,
            catalog,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Retrieves a package by slug.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be decoded.
/// Returns `Ok(None)` if the slug is not published.
pub fn get_package_by_slug(
    conn: &mut SqliteConnection,
    slug: &str,
) -> Result<Option<PackageData>, PersistenceError> {
    debug!(slug, "Looking up package");

    let row: Option<PackageRow> = packages::table
        .filter(packages::slug.eq(slug))
        .select(PackageRow::as_select())
        .first(conn)
        .optional()?;

    row.map(PackageData::try_from).transpose()
}

/// Counts published packages.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_packages(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(packages::table.count().get_result(conn)?)
}
