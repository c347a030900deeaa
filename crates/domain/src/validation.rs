// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context::Locale;
use crate::types::{PassengerField, PassengerRecord};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Minimum length of a first or last name, in characters.
pub const MIN_NAME_LENGTH: usize = 2;
/// Minimum length of a normalized phone number.
pub const MIN_PHONE_LENGTH: usize = 8;
/// Maximum length of a normalized phone number.
pub const MAX_PHONE_LENGTH: usize = 15;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]*$").ok());

/// A single field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldError {
    NameRequired,
    NameTooShort,
    NameInvalidCharacters,
    LastNameRequired,
    LastNameTooShort,
    LastNameInvalidCharacters,
    EmailInvalid,
    PhoneRequired,
    PhoneTooShort,
    PhoneTooLong,
    PhoneInvalid,
}

impl FieldError {
    /// The translation key for this error.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::NameRequired => "validation.name.required",
            Self::NameTooShort => "validation.name.tooShort",
            Self::NameInvalidCharacters => "validation.name.invalidCharacters",
            Self::LastNameRequired => "validation.lastName.required",
            Self::LastNameTooShort => "validation.lastName.tooShort",
            Self::LastNameInvalidCharacters => "validation.lastName.invalidCharacters",
            Self::EmailInvalid => "validation.email.invalid",
            Self::PhoneRequired => "validation.phone.required",
            Self::PhoneTooShort => "validation.phone.tooShort",
            Self::PhoneTooLong => "validation.phone.tooLong",
            Self::PhoneInvalid => "validation.phone.invalid",
        }
    }

    /// The field this error belongs to.
    #[must_use]
    pub const fn field(&self) -> PassengerField {
        match self {
            Self::NameRequired | Self::NameTooShort | Self::NameInvalidCharacters => {
                PassengerField::Name
            }
            Self::LastNameRequired | Self::LastNameTooShort | Self::LastNameInvalidCharacters => {
                PassengerField::LastName
            }
            Self::EmailInvalid => PassengerField::Email,
            Self::PhoneRequired | Self::PhoneTooShort | Self::PhoneTooLong | Self::PhoneInvalid => {
                PassengerField::Phone
            }
        }
    }

    /// The message shown to the traveler.
    #[must_use]
    pub const fn message(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.message_en(),
            Locale::Fr => self.message_fr(),
            Locale::Ar => self.message_ar(),
        }
    }

    const fn message_en(&self) -> &'static str {
        match self {
            Self::NameRequired => "First name is required",
            Self::NameTooShort => "First name must be at least 2 characters",
            Self::NameInvalidCharacters => {
                "First name may only contain letters, spaces, apostrophes and hyphens"
            }
            Self::LastNameRequired => "Last name is required",
            Self::LastNameTooShort => "Last name must be at least 2 characters",
            Self::LastNameInvalidCharacters => {
                "Last name may only contain letters, spaces, apostrophes and hyphens"
            }
            Self::EmailInvalid => "Please enter a valid email address",
            Self::PhoneRequired => "Phone number is required",
            Self::PhoneTooShort => "Phone number must have at least 8 digits",
            Self::PhoneTooLong => "Phone number must have at most 15 digits",
            Self::PhoneInvalid => "Please enter a valid phone number",
        }
    }

    const fn message_fr(&self) -> &'static str {
        match self {
            Self::NameRequired => "Le prénom est obligatoire",
            Self::NameTooShort => "Le prénom doit contenir au moins 2 caractères",
            Self::NameInvalidCharacters => {
                "Le prénom ne peut contenir que des lettres, espaces, apostrophes et tirets"
            }
            Self::LastNameRequired => "Le nom est obligatoire",
            Self::LastNameTooShort => "Le nom doit contenir au moins 2 caractères",
            Self::LastNameInvalidCharacters => {
                "Le nom ne peut contenir que des lettres, espaces, apostrophes et tirets"
            }
            Self::EmailInvalid => "Veuillez saisir une adresse e-mail valide",
            Self::PhoneRequired => "Le numéro de téléphone est obligatoire",
            Self::PhoneTooShort => "Le numéro de téléphone doit comporter au moins 8 chiffres",
            Self::PhoneTooLong => "Le numéro de téléphone doit comporter au plus 15 chiffres",
            Self::PhoneInvalid => "Veuillez saisir un numéro de téléphone valide",
        }
    }

    const fn message_ar(&self) -> &'static str {
        match self {
            Self::NameRequired => "الاسم الشخصي مطلوب",
            Self::NameTooShort => "يجب أن يتكون الاسم الشخصي من حرفين على الأقل",
            Self::NameInvalidCharacters => "يجب أن يحتوي الاسم الشخصي على حروف فقط",
            Self::LastNameRequired => "الاسم العائلي مطلوب",
            Self::LastNameTooShort => "يجب أن يتكون الاسم العائلي من حرفين على الأقل",
            Self::LastNameInvalidCharacters => "يجب أن يحتوي الاسم العائلي على حروف فقط",
            Self::EmailInvalid => "يرجى إدخال بريد إلكتروني صالح",
            Self::PhoneRequired => "رقم الهاتف مطلوب",
            Self::PhoneTooShort => "يجب أن يتكون رقم الهاتف من 8 أرقام على الأقل",
            Self::PhoneTooLong => "يجب ألا يتجاوز رقم الهاتف 15 رقمًا",
            Self::PhoneInvalid => "يرجى إدخال رقم هاتف صالح",
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message(Locale::En))
    }
}

/// Validation results for one passenger. `None` means the field is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerErrors {
    pub name: Option<FieldError>,
    pub last_name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
}

impl PassengerErrors {
    /// Returns whether no field has an error.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }

    /// The error recorded for a field. Health condition never has one.
    #[must_use]
    pub const fn get(&self, field: PassengerField) -> Option<FieldError> {
        match field {
            PassengerField::Name => self.name,
            PassengerField::LastName => self.last_name,
            PassengerField::Email => self.email,
            PassengerField::Phone => self.phone,
            PassengerField::HealthCondition => None,
        }
    }

    /// Records (or clears, with `None`) the error for a field.
    pub const fn set(&mut self, field: PassengerField, error: Option<FieldError>) {
        match field {
            PassengerField::Name => self.name = error,
            PassengerField::LastName => self.last_name = error,
            PassengerField::Email => self.email = error,
            PassengerField::Phone => self.phone = error,
            PassengerField::HealthCondition => {}
        }
    }

    /// All recorded errors, in form order.
    #[must_use]
    pub fn errors(&self) -> Vec<FieldError> {
        [self.name, self.last_name, self.email, self.phone]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Shared rule for first and last names.
fn check_person_name(
    value: &str,
    required: FieldError,
    too_short: FieldError,
    invalid: FieldError,
) -> Option<FieldError> {
    let trimmed: &str = value.trim();

    // Rule: must not be blank
    if trimmed.is_empty() {
        return Some(required);
    }

    // Rule: at least two characters
    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return Some(too_short);
    }

    // Rule: letters (any script), spaces, apostrophes and hyphens only
    let allowed = |c: char| c.is_alphabetic() || c == ' ' || c == '\'' || c == '’' || c == '-';
    if !trimmed.chars().all(allowed) {
        return Some(invalid);
    }

    None
}

/// Validates a first name.
#[must_use]
pub fn validate_name(value: &str) -> Option<FieldError> {
    check_person_name(
        value,
        FieldError::NameRequired,
        FieldError::NameTooShort,
        FieldError::NameInvalidCharacters,
    )
}

/// Validates a last name.
#[must_use]
pub fn validate_last_name(value: &str) -> Option<FieldError> {
    check_person_name(
        value,
        FieldError::LastNameRequired,
        FieldError::LastNameTooShort,
        FieldError::LastNameInvalidCharacters,
    )
}

/// Validates an email address.
///
/// The email is optional: a blank value is valid. Anything else must look
/// like `local@domain.tld`.
#[must_use]
pub fn validate_email(value: &str) -> Option<FieldError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    match EMAIL_PATTERN.as_ref() {
        Some(pattern) if pattern.is_match(trimmed) => None,
        _ => Some(FieldError::EmailInvalid),
    }
}

/// Validates a phone number.
///
/// Whitespace is stripped before checking. The normalized number must be
/// 8 to 15 characters long, optionally start with `+`, and contain only
/// digits with a non-zero first digit.
#[must_use]
pub fn validate_phone(value: &str) -> Option<FieldError> {
    let normalized: String = normalize_phone(value);

    let length: usize = normalized.chars().count();

    if length == 0 {
        return Some(FieldError::PhoneRequired);
    }
    if length < MIN_PHONE_LENGTH {
        return Some(FieldError::PhoneTooShort);
    }
    if length > MAX_PHONE_LENGTH {
        return Some(FieldError::PhoneTooLong);
    }

    match PHONE_PATTERN.as_ref() {
        Some(pattern) if pattern.is_match(&normalized) => None,
        _ => Some(FieldError::PhoneInvalid),
    }
}

/// Removes every whitespace character from a phone number.
#[must_use]
pub fn normalize_phone(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validates one field of a passenger record.
#[must_use]
pub fn validate_field(record: &PassengerRecord, field: PassengerField) -> Option<FieldError> {
    match field {
        PassengerField::Name => validate_name(&record.name),
        PassengerField::LastName => validate_last_name(&record.last_name),
        PassengerField::Email => validate_email(&record.email),
        PassengerField::Phone => validate_phone(&record.phone),
        PassengerField::HealthCondition => None,
    }
}

/// Validates every field of a passenger record.
#[must_use]
pub fn validate_passenger(record: &PassengerRecord) -> PassengerErrors {
    PassengerErrors {
        name: validate_name(&record.name),
        last_name: validate_last_name(&record.last_name),
        email: validate_email(&record.email),
        phone: validate_phone(&record.phone),
    }
}
