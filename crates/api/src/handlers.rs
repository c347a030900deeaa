// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Handlers are transport-agnostic: they take the persistence adapter and a
//! typed request, enforce the booking rules, and return a response DTO or an
//! `ApiError`.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{info, warn};
use umrah_booking_domain::{
    BookingRequest, CatalogRef, FieldError, Locale, PackageCatalog, PackageType, PassengerErrors,
};
use umrah_booking_persistence::{BookingData, PackageData, PackageDefinition, Persistence};

use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    BookingInfo, BookingResponse, ListBookingsResponse, PackageInfo, PackageResponse,
    UpsertPackageRequest,
};

/// Lowercase words separated by single hyphens.
static SLUG_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").ok());

/// Validates a package slug.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an empty or malformed slug.
pub fn validate_slug(slug: &str) -> Result<(), ApiError> {
    let valid: bool = SLUG_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(slug));
    if !valid {
        return Err(ApiError::InvalidInput {
            field: String::from("slug"),
            message: format!("'{slug}' must be lowercase words separated by hyphens"),
        });
    }
    Ok(())
}

/// Creates a booking.
///
/// The payload is re-validated on the server:
///
/// - Rule: at least one passenger
/// - Rule: only umrah packages are booked through this endpoint
/// - Rule: every passenger passes the field validators
/// - Rule: once any package is published, the slug must name one of them,
///   and selections must come from its catalog
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` or `ApiError::DomainRuleViolation` for a
/// rejected payload, `ApiError::ResourceNotFound` for an unknown package,
/// and `ApiError::Internal` if storage fails.
pub fn create_booking(
    persistence: &mut Persistence,
    request: &BookingRequest,
) -> Result<BookingResponse, ApiError> {
    if request.user_data.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("userData"),
            message: String::from("At least one passenger is required"),
        });
    }

    if request.package_type != PackageType::Umrah {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("umrah_only"),
            message: format!(
                "Only umrah packages can be booked here, got '{}'",
                request.package_type
            ),
        });
    }

    let invalid: Vec<(usize, PassengerErrors)> = request.passenger_errors();
    if let Some((index, errors)) = invalid.first() {
        warn!(
            slug = %request.package_slug,
            invalid_passengers = invalid.len(),
            "Rejecting booking with invalid passenger data"
        );
        if let Some(error) = errors.errors().first() {
            return Err(passenger_error(*index, *error));
        }
    }

    let package_count: i64 = persistence
        .count_packages()
        .map_err(|e| translate_persistence_error("count packages", &e))?;
    if package_count > 0 {
        let package: Option<PackageData> = persistence
            .get_package_by_slug(&request.package_slug)
            .map_err(|e| translate_persistence_error("look up package", &e))?;
        let Some(package) = package else {
            return Err(ApiError::ResourceNotFound {
                resource_type: String::from("Package"),
                message: format!("'{}' is not published", request.package_slug),
            });
        };
        check_selections(&package.catalog, request)?;
    }

    let booking: BookingData = persistence
        .insert_booking(request)
        .map_err(|e| translate_persistence_error("store booking", &e))?;

    info!(
        booking_id = %booking.booking_id,
        slug = %booking.package_slug,
        passengers = booking.user_data.len(),
        "Booking created"
    );

    Ok(BookingResponse {
        booking: BookingInfo::from(booking),
    })
}

/// Retrieves one booking.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown id and
/// `ApiError::Internal` if storage fails.
pub fn get_booking(
    persistence: &mut Persistence,
    booking_id: &str,
) -> Result<BookingResponse, ApiError> {
    let booking: Option<BookingData> = persistence
        .get_booking(booking_id)
        .map_err(|e| translate_persistence_error("look up booking", &e))?;

    booking
        .map(|booking| BookingResponse {
            booking: BookingInfo::from(booking),
        })
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("No booking with id '{booking_id}'"),
        })
}

/// Lists every booking, newest first.
///
/// # Errors
///
/// Returns `ApiError::Internal` if storage fails.
pub fn list_bookings(persistence: &mut Persistence) -> Result<ListBookingsResponse, ApiError> {
    let bookings: Vec<BookingData> = persistence
        .list_bookings()
        .map_err(|e| translate_persistence_error("list bookings", &e))?;

    Ok(ListBookingsResponse {
        bookings: bookings.into_iter().map(BookingInfo::from).collect(),
    })
}

/// Looks up a package by slug. Unknown slugs yield `{ package: null }`.
///
/// # Errors
///
/// Returns `ApiError::Internal` if storage fails.
pub fn get_package_by_slug(
    persistence: &mut Persistence,
    slug: &str,
) -> Result<PackageResponse, ApiError> {
    let package: Option<PackageData> = persistence
        .get_package_by_slug(slug)
        .map_err(|e| translate_persistence_error("look up package", &e))?;

    if package.is_none() {
        info!(slug, "Package not published");
    }

    Ok(PackageResponse {
        package: package.map(PackageInfo::from),
    })
}

/// Creates or replaces a package.
///
/// - Rule: the slug is lowercase words separated by hyphens
/// - Rule: the name is not blank
/// - Rule: every catalog entry has a non-blank id, unique within its list
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a rejected definition and
/// `ApiError::Internal` if storage fails.
pub fn upsert_package(
    persistence: &mut Persistence,
    slug: &str,
    request: UpsertPackageRequest,
) -> Result<PackageResponse, ApiError> {
    validate_slug(slug)?;

    if request.name.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Package name is required"),
        });
    }

    check_catalog_ids("programs", request.catalog.programs.iter().map(|p| p.id.as_str()))?;
    check_catalog_ids("rooms", request.catalog.rooms.iter().map(|r| r.id.as_str()))?;
    check_catalog_ids("visas", request.catalog.visas.iter().map(|v| v.id.as_str()))?;

    let definition: PackageDefinition = PackageDefinition {
        name: request.name.trim().to_string(),
        package_type: request.package_type,
        umrah_type: request.umrah_type,
        catalog: request.catalog,
    };
    let package: PackageData = persistence
        .upsert_package(slug, &definition)
        .map_err(|e| translate_persistence_error("store package", &e))?;

    info!(slug, name = %package.name, "Package published");

    Ok(PackageResponse {
        package: Some(PackageInfo::from(package)),
    })
}

fn check_catalog_ids<'a>(
    list: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ApiError> {
    let mut seen: Vec<&str> = Vec::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from(list),
                message: String::from("Every entry needs an id"),
            });
        }
        if seen.contains(&id) {
            return Err(ApiError::InvalidInput {
                field: String::from(list),
                message: format!("Duplicate id '{id}'"),
            });
        }
        seen.push(id);
    }
    Ok(())
}

/// Rejects selections the package catalog does not offer.
fn check_selections(catalog: &PackageCatalog, request: &BookingRequest) -> Result<(), ApiError> {
    let offered = |selection: Option<&CatalogRef>, found: &dyn Fn(&str) -> bool| {
        selection.is_none_or(|r| found(&r.id))
    };

    let checks: [(&str, bool); 3] = [
        (
            "program",
            offered(request.program.as_ref(), &|id| catalog.program(id).is_some()),
        ),
        (
            "room",
            offered(request.room.as_ref(), &|id| catalog.room(id).is_some()),
        ),
        (
            "visa",
            offered(request.visa.as_ref(), &|id| catalog.visa(id).is_some()),
        ),
    ];

    for (field, ok) in checks {
        if !ok {
            return Err(ApiError::InvalidInput {
                field: String::from(field),
                message: format!("Not offered by package '{}'", request.package_slug),
            });
        }
    }
    Ok(())
}

/// Describes a passenger validation failure for the error response.
fn passenger_error(index: usize, error: FieldError) -> ApiError {
    ApiError::InvalidInput {
        field: format!("userData[{index}].{}", error.field()),
        message: String::from(error.message(Locale::En)),
    }
}
