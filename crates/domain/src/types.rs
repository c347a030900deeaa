// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The data collected for one traveler in a booking.
///
/// Every field is kept as the raw text the user typed. Validation is done
/// separately by the field validators so that partially filled records can
/// live in the roster while the form is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerRecord {
    /// First name.
    pub name: String,
    /// Last name.
    pub last_name: String,
    /// Email address (optional; may be blank).
    #[serde(default)]
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Free-text health notes (optional; may be blank).
    #[serde(default)]
    pub health_condition: String,
}

impl PassengerRecord {
    /// Creates an empty passenger record.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns whether the required fields are all filled in.
    ///
    /// A filled passenger collapses to its summary view. Only name, last name
    /// and phone count; email and health condition are optional.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.phone.trim().is_empty()
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn field(&self, field: PassengerField) -> &str {
        match field {
            PassengerField::Name => &self.name,
            PassengerField::LastName => &self.last_name,
            PassengerField::Email => &self.email,
            PassengerField::Phone => &self.phone,
            PassengerField::HealthCondition => &self.health_condition,
        }
    }

    /// Replaces the value of a field.
    pub fn set_field(&mut self, field: PassengerField, value: String) {
        match field {
            PassengerField::Name => self.name = value,
            PassengerField::LastName => self.last_name = value,
            PassengerField::Email => self.email = value,
            PassengerField::Phone => self.phone = value,
            PassengerField::HealthCondition => self.health_condition = value,
        }
    }

    /// Full display name, `"<name> <last name>"` trimmed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// The editable fields of a [`PassengerRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassengerField {
    Name,
    LastName,
    Email,
    Phone,
    HealthCondition,
}

impl PassengerField {
    /// All fields, in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::HealthCondition,
    ];

    /// The wire name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::HealthCondition => "healthCondition",
        }
    }
}

impl FromStr for PassengerField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "lastName" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "healthCondition" => Ok(Self::HealthCondition),
            _ => Err(DomainError::UnknownField(s.to_string())),
        }
    }
}

impl std::fmt::Display for PassengerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Largest passenger count a single booking may declare.
pub const MAX_PASSENGERS: u32 = 50;

/// A declared number of passengers, between one and `MAX_PASSENGERS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PassengerCount(u32);

impl PassengerCount {
    /// Creates a passenger count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPassengerCount` if `count` is zero or
    /// above `MAX_PASSENGERS`.
    pub const fn new(count: u32) -> Result<Self, DomainError> {
        if count == 0 || count > MAX_PASSENGERS {
            return Err(DomainError::InvalidPassengerCount { count });
        }
        Ok(Self(count))
    }

    /// The count value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The count as a roster length.
    #[must_use]
    pub const fn as_len(&self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u32> for PassengerCount {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PassengerCount> for u32 {
    fn from(value: PassengerCount) -> Self {
        value.0
    }
}

impl std::fmt::Display for PassengerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of pilgrimage package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    #[default]
    Umrah,
    Hajj,
}

impl PackageType {
    /// Converts this package type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Umrah => "umrah",
            Self::Hajj => "hajj",
        }
    }
}

impl FromStr for PackageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "umrah" => Ok(Self::Umrah),
            "hajj" => Ok(Self::Hajj),
            _ => Err(DomainError::UnknownPackageType(s.to_string())),
        }
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Umrah sub-type: a fixed collective package or a personalized itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UmrahType {
    #[default]
    Collective,
    Personalized,
}

impl UmrahType {
    /// Converts this umrah type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Collective => "collective",
            Self::Personalized => "personalized",
        }
    }
}

impl FromStr for UmrahType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collective" => Ok(Self::Collective),
            "personalized" => Ok(Self::Personalized),
            _ => Err(DomainError::UnknownPackageType(s.to_string())),
        }
    }
}

impl std::fmt::Display for UmrahType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle of a stored booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Received, not yet reviewed by an agent.
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Converts this status to its stored representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::UnknownBookingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
