//! Judgment value object for pairwise comparisons (1–9 scale and reciprocals).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AnalysisError;

/// Lowest numerator or denominator allowed on the preference scale.
pub const SCALE_MIN: u8 = 1;

/// Highest numerator or denominator allowed on the preference scale.
pub const SCALE_MAX: u8 = 9;

/// Power-of-two denominators a finite float can reduce to within the scale.
const BINARY_DENOMINATORS: [u8; 4] = [1, 2, 4, 8];

/// An exact pairwise judgment: a reduced fraction whose numerator and
/// denominator both lie in `1..=9`.
///
/// `3` reads "three times as important", `1/3` is its reciprocal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Judgment {
    numerator: u8,
    denominator: u8,
}

impl Judgment {
    /// The neutral judgment (equal importance).
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a judgment from a ratio, reducing it first.
    ///
    /// `Judgment::new(3, 9)` is `1/3`; `Judgment::new(10, 1)` fails.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, AnalysisError> {
        let raw = format!("{}/{}", numerator, denominator);
        Self::from_ratio(numerator, denominator, &raw)
    }

    /// Parses the textual forms `"3"`, `"1/3"`, `" 3/9 "` and `"0.5"`.
    pub fn parse(text: &str) -> Result<Self, AnalysisError> {
        let trimmed = text.trim();
        let (numerator, denominator) = match trimmed.split_once('/') {
            Some((num, den)) => (parse_signed(num, text)?, parse_digits(den, text)?),
            None if trimmed.contains('.') => parse_decimal(trimmed, text)?,
            None => (parse_signed(trimmed, text)?, 1),
        };
        Self::from_ratio(numerator, denominator, text)
    }

    /// Converts a float using its exact binary value.
    ///
    /// Only floats that are exactly `p/q` with `q` a power of two reduce to the
    /// scale, so `0.5` is accepted and `1.0 / 3.0` is not.
    pub fn from_f64(value: f64) -> Result<Self, AnalysisError> {
        if !value.is_finite() {
            return Err(AnalysisError::invalid_value(value, "value must be finite"));
        }
        if value <= 0.0 {
            return Err(AnalysisError::invalid_value(value, "value must be positive"));
        }

        for denominator in BINARY_DENOMINATORS {
            let scaled = value * f64::from(denominator);
            if scaled.fract() == 0.0 {
                if scaled > f64::from(SCALE_MAX) {
                    break;
                }
                return Self::from_ratio(scaled as i64, i64::from(denominator), &value.to_string());
            }
        }

        Err(AnalysisError::invalid_value(
            value,
            "not an exact ratio of integers between 1 and 9",
        ))
    }

    fn from_ratio(numerator: i64, denominator: i64, raw: &str) -> Result<Self, AnalysisError> {
        if denominator == 0 {
            return Err(AnalysisError::invalid_value(raw, "denominator cannot be zero"));
        }
        let (numerator, denominator) = if denominator < 0 {
            match (numerator.checked_neg(), denominator.checked_neg()) {
                (Some(n), Some(d)) => (n, d),
                _ => return Err(AnalysisError::invalid_value(raw, "value out of range")),
            }
        } else {
            (numerator, denominator)
        };
        if numerator <= 0 {
            return Err(AnalysisError::invalid_value(raw, "value must be positive"));
        }

        let divisor = gcd(numerator as u64, denominator as u64);
        let numerator = numerator as u64 / divisor;
        let denominator = denominator as u64 / divisor;

        if !in_scale(numerator) {
            return Err(AnalysisError::invalid_value(
                raw,
                format!("numerator must be between {} and {}", SCALE_MIN, SCALE_MAX),
            ));
        }
        if !in_scale(denominator) {
            return Err(AnalysisError::invalid_value(
                raw,
                format!("denominator must be between {} and {}", SCALE_MIN, SCALE_MAX),
            ));
        }

        Ok(Self {
            numerator: numerator as u8,
            denominator: denominator as u8,
        })
    }

    /// Returns the reduced numerator.
    pub fn numerator(&self) -> u8 {
        self.numerator
    }

    /// Returns the reduced denominator.
    pub fn denominator(&self) -> u8 {
        self.denominator
    }

    /// Returns the exact reciprocal, which is always on the scale too.
    pub fn reciprocal(&self) -> Self {
        Self {
            numerator: self.denominator,
            denominator: self.numerator,
        }
    }

    /// Returns true for the neutral judgment.
    pub fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// Returns the judgment as a float.
    pub fn value(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl Default for Judgment {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Judgment {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Judgment {
    type Error = AnalysisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Judgment> for String {
    fn from(value: Judgment) -> Self {
        value.to_string()
    }
}

/// A judgment as supplied by the presentation layer, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum JudgmentInput {
    Text(String),
    Integer(i64),
    Float(f64),
    Exact(Judgment),
}

impl fmt::Display for JudgmentInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JudgmentInput::Text(text) => write!(f, "{}", text),
            JudgmentInput::Integer(value) => write!(f, "{}", value),
            JudgmentInput::Float(value) => write!(f, "{}", value),
            JudgmentInput::Exact(judgment) => write!(f, "{}", judgment),
        }
    }
}

impl TryFrom<JudgmentInput> for Judgment {
    type Error = AnalysisError;

    fn try_from(input: JudgmentInput) -> Result<Self, Self::Error> {
        match input {
            JudgmentInput::Text(text) => Judgment::parse(&text),
            JudgmentInput::Integer(value) => Judgment::new(value, 1),
            JudgmentInput::Float(value) => Judgment::from_f64(value),
            JudgmentInput::Exact(judgment) => Ok(judgment),
        }
    }
}

impl From<&str> for JudgmentInput {
    fn from(value: &str) -> Self {
        JudgmentInput::Text(value.to_string())
    }
}

impl From<String> for JudgmentInput {
    fn from(value: String) -> Self {
        JudgmentInput::Text(value)
    }
}

impl From<i64> for JudgmentInput {
    fn from(value: i64) -> Self {
        JudgmentInput::Integer(value)
    }
}

impl From<i32> for JudgmentInput {
    fn from(value: i32) -> Self {
        JudgmentInput::Integer(i64::from(value))
    }
}

impl From<u32> for JudgmentInput {
    fn from(value: u32) -> Self {
        JudgmentInput::Integer(i64::from(value))
    }
}

impl From<f64> for JudgmentInput {
    fn from(value: f64) -> Self {
        JudgmentInput::Float(value)
    }
}

impl From<Judgment> for JudgmentInput {
    fn from(value: Judgment) -> Self {
        JudgmentInput::Exact(value)
    }
}

fn in_scale(value: u64) -> bool {
    (u64::from(SCALE_MIN)..=u64::from(SCALE_MAX)).contains(&value)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn parse_digits(part: &str, raw: &str) -> Result<i64, AnalysisError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AnalysisError::invalid_value(raw, "not a number"));
    }
    part.parse::<i64>()
        .map_err(|_| AnalysisError::invalid_value(raw, "value out of range"))
}

fn parse_signed(part: &str, raw: &str) -> Result<i64, AnalysisError> {
    match part.strip_prefix('-') {
        Some(rest) => Ok(-parse_digits(rest, raw)?),
        None => parse_digits(part.strip_prefix('+').unwrap_or(part), raw),
    }
}

/// Exact decimal: `"1.25"` is `125/100`.
fn parse_decimal(text: &str, raw: &str) -> Result<(i64, i64), AnalysisError> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, fraction) = unsigned
        .split_once('.')
        .ok_or_else(|| AnalysisError::invalid_value(raw, "not a number"))?;
    if whole.is_empty() && fraction.is_empty() {
        return Err(AnalysisError::invalid_value(raw, "not a number"));
    }

    let whole = if whole.is_empty() { 0 } else { parse_digits(whole, raw)? };
    let fraction = fraction.trim_end_matches('0');
    let (fraction, scale) = if fraction.is_empty() {
        (0, 1)
    } else {
        let exponent = u32::try_from(fraction.len())
            .map_err(|_| AnalysisError::invalid_value(raw, "value out of range"))?;
        let scale = 10_i64
            .checked_pow(exponent)
            .ok_or_else(|| AnalysisError::invalid_value(raw, "value out of range"))?;
        (parse_digits(fraction, raw)?, scale)
    };

    let numerator = whole
        .checked_mul(scale)
        .and_then(|n| n.checked_add(fraction))
        .ok_or_else(|| AnalysisError::invalid_value(raw, "value out of range"))?;

    Ok((if negative { -numerator } else { numerator }, scale))
}
