// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;
use umrah_booking_domain::{BookingRequest, BookingStatus, CatalogRef};
use uuid::Uuid;

use crate::data_models::BookingData;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Stores a booking request as a new pending booking.
///
/// The booking id is a freshly generated UUID and the creation time is
/// `now` in RFC 3339 form.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `request` - The booking as submitted
/// * `now` - The creation time
///
/// # Errors
///
/// Returns an error if the passengers cannot be serialized or the insert
/// fails.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    request: &BookingRequest,
    now: OffsetDateTime,
) -> Result<BookingData, PersistenceError> {
    let booking_id: String = Uuid::new_v4().to_string();
    let created_at: String = now.format(&Rfc3339)?;
    let user_data_json: String = serde_json::to_string(&request.user_data)?;
    let status: BookingStatus = BookingStatus::Pending;

    let id_of = |r: Option<&CatalogRef>| r.map(|r| r.id.clone());
    let name_of = |r: Option<&CatalogRef>| r.map(|r| r.name.clone());

    diesel::insert_into(bookings::table)
        .values((
            bookings::booking_id.eq(&booking_id),
            bookings::package_slug.eq(&request.package_slug),
            bookings::package_type.eq(request.package_type.as_str()),
            bookings::umrah_type.eq(request.umrah_type.as_str()),
            bookings::user_data_json.eq(&user_data_json),
            bookings::program_id.eq(id_of(request.program.as_ref())),
            bookings::program_name.eq(name_of(request.program.as_ref())),
            bookings::room_id.eq(id_of(request.room.as_ref())),
            bookings::room_name.eq(name_of(request.room.as_ref())),
            bookings::visa_id.eq(id_of(request.visa.as_ref())),
            bookings::visa_name.eq(name_of(request.visa.as_ref())),
            bookings::status.eq(status.as_str()),
            bookings::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    info!(
        booking_id = %booking_id,
        slug = %request.package_slug,
        passengers = request.user_data.len(),
        "Booking stored"
    );

    Ok(BookingData {
        booking_id,
        package_slug: request.package_slug.clone(),
        package_type: request.package_type,
        umrah_type: request.umrah_type,
        user_data: request.user_data.clone(),
        program: request.program.clone(),
        room: request.room.clone(),
        visa: request.visa.clone(),
        status,
        created_at,
    })
}
