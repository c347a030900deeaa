// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::data_models::{PackageData, PackageDefinition};
use crate::diesel_schema::packages;
use crate::error::PersistenceError;
use crate::queries::packages::get_package_by_slug;

/// Creates or replaces the package published under `slug`.
///
/// An existing package keeps its creation time; everything else is
/// overwritten.
///
/// # Errors
///
/// Returns an error if the catalog cannot be serialized or the write fails.
pub fn upsert_package(
    conn: &mut SqliteConnection,
    slug: &str,
    definition: &PackageDefinition,
    now: OffsetDateTime,
) -> Result<PackageData, PersistenceError> {
    let timestamp: String = now.format(&Rfc3339)?;
    let catalog_json: String = serde_json::to_string(&definition.catalog)?;

    diesel::insert_into(packages::table)
        .values((
            packages::slug.eq(slug),
            packages::name.eq(&definition.name),
            packages::package_type.eq(definition.package_type.as_str()),
            packages::umrah_type.eq(definition.umrah_type.as_str()),
            packages::catalog_json.eq(&catalog_json),
            packages::created_at.eq(&timestamp),
            packages::updated_at.eq(&timestamp),
        ))
        .on_conflict(packages::slug)
        .do_update()
        .set((
            packages::name.eq(&definition.name),
            packages::package_type.eq(definition.package_type.as_str()),
            packages::umrah_type.eq(definition.umrah_type.as_str()),
            packages::catalog_json.eq(&catalog_json),
            packages::updated_at.eq(&timestamp),
        ))
        .execute(conn)?;

    info!(
        slug,
        programs = definition.catalog.programs.len(),
        rooms = definition.catalog.rooms.len(),
        visas = definition.catalog.visas.len(),
        "Package stored"
    );

    get_package_by_slug(conn, slug)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Package '{slug}'")))
}
