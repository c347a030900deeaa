// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client side of the Umrah booking system.
//!
//! - `HttpBookingClient` talks to the booking REST API and serves as the
//!   wizard's `BookingGateway` and `PackageSource`
//! - `PdfReceiptRenderer` draws the receipt of a confirmed booking
//! - `execute_plan` drives a wizard session from a `BookingPlan`

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

mod error;
mod http;
mod plan;
mod receipt;

#[cfg(test)]
mod tests;

pub use error::{ClientError, PlanError};
pub use http::HttpBookingClient;
pub use plan::{BookingPlan, PlanOutcome, execute_plan};
pub use receipt::{PdfReceiptRenderer, receipt_file_name};
