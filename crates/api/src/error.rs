// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;
use tracing::error;
use umrah_booking_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract. The display text is what clients see in the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("{message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a storage failure into an API error, logging it.
#[must_use]
pub fn translate_persistence_error(operation: &str, err: &PersistenceError) -> ApiError {
    error!(operation, error = %err, "Storage failure");
    ApiError::Internal {
        message: format!("Failed to {operation}"),
    }
}
