// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the booking client.

use thiserror::Error;
use umrah_booking::{CoreError, GatewayError, SubmitError};

/// Failures talking to the booking service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL cannot address the API.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The URL as given.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The request never got a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// A success response whose body is not what the API returns.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The server answered with a non-success status.
    #[error("Server returned {status}: {}", message.as_deref().unwrap_or("no error message"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the response body, if present.
        message: Option<String>,
    },
}

impl From<ClientError> for GatewayError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Server { status, message } => Self::Rejected { status, message },
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Failures running a booking plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A plan step was refused by the wizard.
    #[error("Step {step} ({command}) failed: {source}")]
    Command {
        /// Zero-based position of the step.
        step: usize,
        /// The command name.
        command: String,
        /// The wizard's reason.
        source: CoreError,
    },
    /// One or more passengers failed validation.
    #[error("Booking has invalid passenger data: {}", .0.join("; "))]
    InvalidPassengers(Vec<String>),
    /// The booking was not accepted.
    #[error("{}", .0.user_message())]
    Submit(#[from] SubmitError),
}
