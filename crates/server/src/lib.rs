// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP surface of the Umrah booking system.
//!
//! Routes:
//!
//! - `POST /api/bookings` creates a booking (201)
//! - `GET /api/bookings` lists bookings, newest first
//! - `GET /api/bookings/{id}` returns one booking
//! - `GET /api/packages/slug/{slug}` returns a package or `{ "package": null }`
//! - `PUT /api/packages/slug/{slug}` creates or replaces a package
//!
//! Every non-2xx response carries `{ "error": "<message>" }`.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use umrah_booking_api::{
    ApiError, BookingResponse, ErrorResponse, ListBookingsResponse, PackageResponse,
    UpsertPackageRequest, create_booking, get_booking, get_package_by_slug, list_bookings,
    upsert_package,
};
use umrah_booking_domain::{BookingRequest, PackageCatalog, PackageType, UmrahType};
use umrah_booking_persistence::{PersistenceError, Persistence};

#[cfg(test)]
mod tests;

/// Application state shared across handlers.
///
/// The persistence layer sits behind a Mutex and is locked per request.
#[derive(Clone)]
pub struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

impl AppState {
    #[must_use]
    pub fn new(persistence: Persistence) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::DomainRuleViolation { .. } | ApiError::InvalidInput { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_client_error() {
            warn!(status = status.as_u16(), error = %err, "Request rejected");
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: String::from("Internal error: storage unavailable"),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Malformed request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid request body: {}", rejection.body_text()),
        }
    }
}

/// Handler for POST `/api/bookings`.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), HttpError> {
    let Json(request) = payload?;
    info!(
        slug = %request.package_slug,
        passengers = request.user_data.len(),
        "Handling create_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse = create_booking(&mut persistence, &request)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/api/bookings`.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListBookingsResponse>, HttpError> {
    info!("Handling list_bookings request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListBookingsResponse = list_bookings(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/bookings/{id}`.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<String>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(booking_id = %booking_id, "Handling get_booking request");

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse = get_booking(&mut persistence, &booking_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/packages/slug/{slug}`.
async fn handle_get_package(
    AxumState(app_state): AxumState<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PackageResponse>, HttpError> {
    info!(slug = %slug, "Handling get_package request");

    let mut persistence = app_state.persistence.lock().await;
    let response: PackageResponse = get_package_by_slug(&mut persistence, &slug)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/api/packages/slug/{slug}`.
async fn handle_upsert_package(
    AxumState(app_state): AxumState<AppState>,
    Path(slug): Path<String>,
    payload: Result<Json<UpsertPackageRequest>, JsonRejection>,
) -> Result<Json<PackageResponse>, HttpError> {
    let Json(request) = payload?;
    info!(slug = %slug, name = %request.name, "Handling upsert_package request");

    let mut persistence = app_state.persistence.lock().await;
    let response: PackageResponse = upsert_package(&mut persistence, &slug, request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
#[must_use]
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/bookings",
            get(handle_list_bookings).post(handle_create_booking),
        )
        .route("/api/bookings/{id}", get(handle_get_booking))
        .route(
            "/api/packages/slug/{slug}",
            get(handle_get_package).put(handle_upsert_package),
        )
        .with_state(app_state)
}

/// Publishes the built-in catalog under `slug` unless a package already
/// exists there.
///
/// Returns `true` when a package was stored.
///
/// # Errors
///
/// Returns an error if the slug is invalid or storage fails.
pub fn seed_package(persistence: &mut Persistence, slug: &str) -> Result<bool, HttpError> {
    if persistence.get_package_by_slug(slug)?.is_some() {
        info!(slug, "Seed package already published");
        return Ok(false);
    }

    let request: UpsertPackageRequest = UpsertPackageRequest {
        name: slug.to_string(),
        package_type: PackageType::Umrah,
        umrah_type: UmrahType::Collective,
        catalog: PackageCatalog::fallback(),
    };
    upsert_package(persistence, slug, request)?;
    info!(slug, "Seeded package with the built-in catalog");
    Ok(true)
}
