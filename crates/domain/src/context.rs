// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Site-wide display context: language and currency.
//!
//! The context is built once at start-up and passed explicitly to anything
//! that renders text for a traveler (validation messages, receipts).

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Ar,
}

impl Locale {
    /// The ISO 639-1 code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Whether text in this locale is written right to left.
    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        matches!(self, Self::Ar)
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "ar" => Ok(Self::Ar),
            _ => Err(DomainError::UnknownLocale(s.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display currencies. Catalog prices are published in dirhams and
/// converted for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Mad,
    Eur,
    Usd,
    Sar,
}

impl Currency {
    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Mad => "MAD",
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Sar => "SAR",
        }
    }

    /// Units of this currency per 100 dirhams.
    const fn per_hundred_mad(&self) -> u64 {
        match self {
            Self::Mad => 100,
            Self::Eur => 9,
            Self::Usd => 10,
            Self::Sar => 37,
        }
    }

    /// Converts a dirham amount to this currency, rounded to the nearest unit.
    #[must_use]
    pub const fn convert_from_mad(&self, amount_mad: u64) -> u64 {
        (amount_mad * self.per_hundred_mad() + 50) / 100
    }

    /// Formats a dirham amount in this currency, e.g. `"1 690 EUR"`.
    #[must_use]
    pub fn format_mad(&self, amount_mad: u64) -> String {
        format!(
            "{} {}",
            group_thousands(self.convert_from_mad(amount_mad)),
            self.code()
        )
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MAD" => Ok(Self::Mad),
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "SAR" => Ok(Self::Sar),
            _ => Err(DomainError::UnknownCurrency(s.to_string())),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

fn group_thousands(value: u64) -> String {
    let digits: String = value.to_string();
    let mut grouped: String = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

/// The language and currency a session renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteContext {
    pub locale: Locale,
    pub currency: Currency,
}

impl SiteContext {
    /// Creates a site context.
    #[must_use]
    pub const fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }
}
