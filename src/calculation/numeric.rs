//! Lenient numeric normalization.
//!
//! Monetary and day-count values reach the engine as user-typed or
//! OCR-extracted text in mixed numeric conventions: Italian grouping
//! (`1.234,56`), English grouping (`1,234.56`), bare decimal commas,
//! currency symbols, stray whitespace. This module is the single
//! normalization point shared by every entry point; anything unparseable
//! coerces to zero rather than failing, because upstream inputs are
//! routinely partial or hand-typed.

use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Parses a locale-ambiguous decimal string, coercing failures to zero.
///
/// Handling rules:
/// - currency symbols (`€`, `$`), regular and non-breaking spaces, and
///   apostrophe grouping are stripped;
/// - when both `.` and `,` are present, the rightmost acts as the decimal
///   separator and the other is grouping;
/// - a lone comma is always a decimal separator (`1234,56`, `1,5`);
/// - a lone dot followed by exactly three digits with a short non-zero
///   integer part is grouping (`1.234` is one thousand two hundred
///   thirty-four), otherwise a decimal separator (`0.375`, `1234.567`);
/// - repeated occurrences of the same separator are grouping;
/// - empty or unparseable input yields exactly zero.
///
/// # Examples
///
/// ```
/// use ferie_engine::calculation::parse_decimal;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_decimal("1.234,56"), Decimal::from_str("1234.56").unwrap());
/// assert_eq!(parse_decimal("1,234.56"), Decimal::from_str("1234.56").unwrap());
/// assert_eq!(parse_decimal("€ 120,50"), Decimal::from_str("120.50").unwrap());
/// assert_eq!(parse_decimal("garbage"), Decimal::ZERO);
/// ```
pub fn parse_decimal(input: &str) -> Decimal {
    let mut cleaned = String::with_capacity(input.len());
    for (i, ch) in input.trim().chars().enumerate() {
        match ch {
            '0'..='9' | '.' | ',' => cleaned.push(ch),
            '-' if i == 0 => cleaned.push(ch),
            // currency symbols, spaces and apostrophe grouping
            '€' | '$' | '\'' | ' ' | '\u{a0}' => {}
            _ => return Decimal::ZERO,
        }
    }

    if cleaned.is_empty() || cleaned == "-" {
        return Decimal::ZERO;
    }

    let normalized = normalize_separators(&cleaned);
    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

/// Rewrites grouping/decimal separators into plain `1234.56` form.
fn normalize_separators(cleaned: &str) -> String {
    let last_dot = cleaned.rfind('.');
    let last_comma = cleaned.rfind(',');

    let decimal_sep = match (last_dot, last_comma) {
        (Some(d), Some(c)) => {
            if d > c {
                Some('.')
            } else {
                Some(',')
            }
        }
        (Some(d), None) => {
            if cleaned.matches('.').count() > 1 {
                None
            } else if is_grouping_dot(cleaned, d) {
                None
            } else {
                Some('.')
            }
        }
        (None, Some(_)) => {
            if cleaned.matches(',').count() > 1 {
                None
            } else {
                Some(',')
            }
        }
        (None, None) => None,
    };

    let mut out = String::with_capacity(cleaned.len());
    let sep_position = match decimal_sep {
        Some('.') => last_dot,
        Some(',') => last_comma,
        _ => None,
    };
    for (i, ch) in cleaned.char_indices() {
        match ch {
            '.' | ',' => {
                if Some(i) == sep_position {
                    out.push('.');
                }
                // grouping separators are dropped
            }
            other => out.push(other),
        }
    }
    out
}

/// A lone dot is Italian thousands grouping when exactly three digits
/// follow it and a short, non-zero integer part precedes it.
fn is_grouping_dot(cleaned: &str, dot_index: usize) -> bool {
    let before: &str = &cleaned[..dot_index];
    let after: &str = &cleaned[dot_index + 1..];
    let before_digits = before.trim_start_matches('-');

    after.len() == 3
        && !before_digits.is_empty()
        && before_digits.len() <= 3
        && before_digits != "0"
}

/// A `Decimal` wrapper that deserializes leniently.
///
/// Accepts JSON numbers, locale-formatted strings and `null`, all funneled
/// through [`parse_decimal`]; anything else coerces to zero. Serializes
/// exactly like `Decimal`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LenientDecimal(pub Decimal);

impl LenientDecimal {
    /// Unwraps the inner decimal value.
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl From<LenientDecimal> for Decimal {
    fn from(lenient: LenientDecimal) -> Self {
        lenient.0
    }
}

impl From<Decimal> for LenientDecimal {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Serialize for LenientDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.0, serializer)
    }
}

struct LenientDecimalVisitor;

impl<'de> Visitor<'de> for LenientDecimalVisitor {
    type Value = LenientDecimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string, or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(LenientDecimal(parse_decimal(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(LenientDecimal(
            Decimal::from_str(&value.to_string()).unwrap_or(Decimal::ZERO),
        ))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(LenientDecimal(Decimal::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(LenientDecimal(Decimal::from(value)))
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
        Ok(LenientDecimal(Decimal::ZERO))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LenientDecimal(Decimal::ZERO))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LenientDecimal(Decimal::ZERO))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(LenientDecimalVisitor)
    }
}

impl<'de> Deserialize<'de> for LenientDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientDecimalVisitor)
    }
}
