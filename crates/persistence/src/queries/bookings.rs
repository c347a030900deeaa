// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use umrah_booking_domain::{
    BookingStatus, CatalogRef, DomainError, PackageType, PassengerRecord, UmrahType,
};

use crate::data_models::BookingData;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Diesel Queryable struct for booking rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bookings)]
struct BookingRow {
    booking_id: String,
    package_slug: String,
    package_type: String,
    umrah_type: String,
    user_data_json: String,
    program_id: Option<String>,
    program_name: Option<String>,
    room_id: Option<String>,
    room_name: Option<String>,
    visa_id: Option<String>,
    visa_name: Option<String>,
    status: String,
    created_at: String,
}

impl TryFrom<BookingRow> for BookingData {
    type Error = PersistenceError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let corrupt = |e: DomainError| PersistenceError::CorruptRecord {
            table: "bookings",
            reason: e.to_string(),
        };

        let package_type: PackageType = row.package_type.parse().map_err(corrupt)?;
        let umrah_type: UmrahType = row.umrah_type.parse().map_err(corrupt)?;
        let status: BookingStatus = row.status.parse().map_err(corrupt)?;
        let user_data: Vec<PassengerRecord> = serde_json::from_str(&row.user_data_json)?;

        Ok(Self {
            booking_id: row.booking_id,
            package_slug: row.package_slug,
            package_type,
            umrah_type,
            user_data,
            program: catalog_ref(row.program_id, row.program_name),
            room: catalog_ref(row.room_id, row.room_name),
            visa: catalog_ref(row.visa_id, row.visa_name),
            status,
            created_at: row.created_at,
        })
    }
}

fn catalog_ref(id: Option<String>, name: Option<String>) -> Option<CatalogRef> {
    match (id, name) {
        (Some(id), Some(name)) => Some(CatalogRef { id, name }),
        _ => None,
    }
}

/// Retrieves a booking by its UUID.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be decoded.
/// Returns `Ok(None)` if no booking has that id.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: &str,
) -> Result<Option<BookingData>, PersistenceError> {
    debug!(booking_id, "Looking up booking");

    let row: Option<BookingRow> = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .select(BookingRow::as_select())
        .first(conn)
        .optional()?;

    row.map(BookingData::try_from).transpose()
}

/// Lists every booking, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_bookings(conn: &mut SqliteConnection) -> Result<Vec<BookingData>, PersistenceError> {
    let rows: Vec<BookingRow> = bookings::table
        .order(bookings::booking_seq.desc())
        .select(BookingRow::as_select())
        .load(conn)?;

    rows.into_iter().map(BookingData::try_from).collect()
}

/// Counts stored bookings.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_bookings(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(bookings::table.count().get_result(conn)?)
}
