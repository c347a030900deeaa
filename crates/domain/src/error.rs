// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::MAX_PASSENGERS;

/// Errors that can occur while constructing or parsing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Passenger count must be between one and `MAX_PASSENGERS`.
    InvalidPassengerCount {
        /// The rejected count.
        count: u32,
    },
    /// A passenger field name did not match any known field.
    UnknownField(String),
    /// A locale code is not supported.
    UnknownLocale(String),
    /// A currency code is not supported.
    UnknownCurrency(String),
    /// A package or umrah type string is not recognised.
    UnknownPackageType(String),
    /// A booking status string is not recognised.
    UnknownBookingStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPassengerCount { count } => {
                write!(
                    f,
                    "Invalid passenger count: {count}. Must be between 1 and {MAX_PASSENGERS}"
                )
            }
            Self::UnknownField(name) => write!(f, "Unknown passenger field: '{name}'"),
            Self::UnknownLocale(code) => {
                write!(f, "Unknown locale '{code}'. Must be one of en, fr, ar")
            }
            Self::UnknownCurrency(code) => {
                write!(
                    f,
                    "Unknown currency '{code}'. Must be one of MAD, EUR, USD, SAR"
                )
            }
            Self::UnknownPackageType(value) => write!(f, "Unknown package type: '{value}'"),
            Self::UnknownBookingStatus(value) => {
                write!(f, "Unknown booking status: '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
