//! Numeric range bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A parsed numeric bound of a range filter.
///
/// Literals without a decimal point or exponent that fit in an `i64` are
/// integers; every other numeric literal is a float. Equality is strict:
/// `Integer(15)` and `Float(15.0)` are different bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeNumber {
    /// A signed integer value.
    Integer(i64),
    /// A finite floating-point value.
    Float(f64),
}

/// The raw value is not a base-10 numeric literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a number")]
pub struct InvalidNumber(pub String);

impl RangeNumber {
    /// Parse a raw filter value, returning `None` when it is not numeric.
    ///
    /// The whole string must be a literal: optional sign, digits with an
    /// optional decimal point, optional exponent. Surrounding whitespace,
    /// hexadecimal, and non-finite values are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let shape = scan_literal(raw)?;

        if !shape.fractional
            && !shape.exponent
            && let Ok(value) = raw.parse::<i64>()
        {
            return Some(Self::Integer(value));
        }

        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Self::Float)
    }
}

impl FromStr for RangeNumber {
    type Err = InvalidNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidNumber(s.to_string()))
    }
}

impl fmt::Display for RangeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<RangeNumber> for serde_json::Value {
    fn from(number: RangeNumber) -> Self {
        match number {
            RangeNumber::Integer(value) => serde_json::Value::from(value),
            RangeNumber::Float(value) => serde_json::Value::from(value),
        }
    }
}

/// What a scanned literal contains.
struct LiteralShape {
    fractional: bool,
    exponent: bool,
}

fn scan_literal(raw: &str) -> Option<LiteralShape> {
    let bytes = raw.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut fractional = false;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        fractional = true;
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    let mut exponent = false;
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        exponent = true;
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return None;
        }
        pos += exp_digits;
    }

    (pos == bytes.len()).then_some(LiteralShape {
        fractional,
        exponent,
    })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
