// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Currency, DomainError, Locale, SiteContext};
use std::str::FromStr;

#[test]
fn test_locale_parses_case_insensitively() {
    assert_eq!(Locale::from_str("FR").unwrap(), Locale::Fr);
    assert_eq!(Locale::from_str("ar").unwrap(), Locale::Ar);
    assert_eq!(
        Locale::from_str("de"),
        Err(DomainError::UnknownLocale(String::from("de")))
    );
}

#[test]
fn test_only_arabic_is_right_to_left() {
    assert!(Locale::Ar.is_rtl());
    assert!(!Locale::En.is_rtl());
    assert!(!Locale::Fr.is_rtl());
}

#[test]
fn test_currency_parses_case_insensitively() {
    assert_eq!(Currency::from_str("eur").unwrap(), Currency::Eur);
    assert!(Currency::from_str("GBP").is_err());
}

#[test]
fn test_currency_conversion_from_mad() {
    assert_eq!(Currency::Mad.convert_from_mad(16_900), 16_900);
    assert_eq!(Currency::Eur.convert_from_mad(16_900), 1_521);
    assert_eq!(Currency::Usd.convert_from_mad(16_900), 1_690);
    assert_eq!(Currency::Sar.convert_from_mad(100), 37);
}

#[test]
fn test_currency_formatting_groups_thousands() {
    assert_eq!(Currency::Mad.format_mad(16_900), "16 900 MAD");
    assert_eq!(Currency::Mad.format_mad(1_234_567), "1 234 567 MAD");
    assert_eq!(Currency::Usd.format_mad(500), "50 USD");
    assert_eq!(Currency::Mad.format_mad(0), "0 MAD");
}

#[test]
fn test_site_context_defaults_to_english_and_dirhams() {
    let context: SiteContext = SiteContext::default();
    assert_eq!(context, SiteContext::new(Locale::En, Currency::Mad));
}

#[test]
fn test_currency_wire_name_is_uppercase() {
    assert_eq!(serde_json::to_string(&Currency::Sar).unwrap(), "\"SAR\"");
}
