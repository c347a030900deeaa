// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP access to the booking service.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use umrah_booking::{BookingConfirmation, BookingGateway, GatewayError, PackageSource};
use umrah_booking_domain::{BookingRequest, PackageCatalog};

use crate::error::ClientError;

#[derive(Debug, Deserialize)]
struct BookingEnvelope {
    booking: CreatedBooking,
}

#[derive(Debug, Deserialize)]
struct CreatedBooking {
    id: String,
}

#[derive(Debug, Deserialize)]
struct PackageEnvelope {
    package: Option<PublishedPackage>,
}

#[derive(Debug, Deserialize)]
struct PublishedPackage {
    #[serde(default)]
    name: String,
    #[serde(flatten)]
    catalog: PackageCatalog,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the booking REST API.
///
/// Implements both `BookingGateway` and `PackageSource`, so one instance
/// serves a whole wizard session.
#[derive(Debug, Clone)]
pub struct HttpBookingClient {
    client: Client,
    base_url: Url,
}

impl HttpBookingClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` if the URL cannot be parsed or
    /// cannot carry a path.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client that sends requests through an existing
    /// `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` if the URL cannot be parsed or
    /// cannot carry a path.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let parsed: Url = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: String::from("URL cannot carry a path"),
            });
        }
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// The service root requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Posts a booking and returns the id the server assigned.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Server` for a non-success status, and
    /// `ClientError::Http` or `ClientError::Decode` if no usable response
    /// arrives.
    pub async fn submit_booking(&self, request: &BookingRequest) -> Result<String, ClientError> {
        let url: Url = self.endpoint(&["api", "bookings"])?;
        debug!(%url, passengers = request.user_data.len(), "Posting booking");

        let response: Response = self.client.post(url).json(request).send().await?;
        let envelope: BookingEnvelope = read_json(response).await?;

        info!(booking_id = %envelope.booking.id, "Booking accepted by server");
        Ok(envelope.booking.id)
    }

    /// Fetches the catalog of a published package. `Ok(None)` means the
    /// server has no package under `slug`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Server` for a non-success status, and
    /// `ClientError::Http` or `ClientError::Decode` if no usable response
    /// arrives.
    pub async fn fetch_package(&self, slug: &str) -> Result<Option<PackageCatalog>, ClientError> {
        let url: Url = self.endpoint(&["api", "packages", "slug", slug])?;
        debug!(%url, "Fetching package");

        let response: Response = self.client.get(url).send().await?;
        let envelope: PackageEnvelope = read_json(response).await?;

        Ok(envelope.package.map(|package| {
            debug!(slug, name = %package.name, "Package found");
            package.catalog
        }))
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url: Url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: String::from("URL cannot carry a path"),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Decodes a success body, or turns a non-success status into
/// `ClientError::Server` with the body's `error` message when it has one.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status: StatusCode = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message: Option<String> = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .map(|body| body.error);
        warn!(status = status.as_u16(), message = ?message, "Server returned an error");
        return Err(ClientError::Server {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl BookingGateway for HttpBookingClient {
    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, GatewayError> {
        let booking_id: String = self.submit_booking(request).await?;
        Ok(BookingConfirmation { booking_id })
    }
}

#[async_trait]
impl PackageSource for HttpBookingClient {
    async fn package_catalog(&self, slug: &str) -> Result<Option<PackageCatalog>, GatewayError> {
        Ok(self.fetch_package(slug).await?)
    }
}
