//! Currency text as entered on stock requests, and exact parsed amounts.
//!
//! Amounts are held in minor units (hundredths) so sums stay exact.

use super::ParseCurrencyError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MINOR_PER_MAJOR: u64 = 100;

/// Unparsed cost text such as `"₹1,250"`.
///
/// Parsing is deferred to summary time so that a malformed value fails the
/// summary loudly instead of being dropped at entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostText(String);

impl CostText {
    /// Wraps raw cost text.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the text as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CostText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative currency amount with two decimal places.
///
/// Serialises as its decimal text, `"1650.00"`, never as minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CurrencyAmount(u64);

impl CurrencyAmount {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from minor units.
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Creates a whole amount, or `None` on overflow.
    #[must_use]
    pub const fn from_major(major: u64) -> Option<Self> {
        match major.checked_mul(MINOR_PER_MAJOR) {
            Some(minor) => Some(Self(minor)),
            None => None,
        }
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Returns the whole part of the amount.
    #[must_use]
    pub const fn major_units(self) -> u64 {
        self.0.div_euclid(MINOR_PER_MAJOR)
    }

    /// Adds two amounts, or `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Parses cost text after stripping one of the given currency symbols.
    ///
    /// Accepts thousands separators and at most two decimal places:
    /// `"₹250"`, `"Rs. 1,250.50"`, `"800"`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCurrencyError`] for empty, signed, or non-numeric text.
    pub fn parse(text: &str, symbols: &[String]) -> Result<Self, ParseCurrencyError> {
        let malformed = || ParseCurrencyError(text.to_owned());
        let trimmed = text.trim();
        let body = symbols
            .iter()
            .find_map(|symbol| trimmed.strip_prefix(symbol.as_str()))
            .unwrap_or(trimmed)
            .trim();
        let digits: String = body.chars().filter(|c| *c != ',').collect();
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !is_digits(whole) || !is_digits(fraction) || fraction.len() > 2 {
            return Err(malformed());
        }

        let major: u64 = whole.parse().map_err(|_| malformed())?;
        let minor = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| malformed())? * 10,
            _ => fraction.parse::<u64>().map_err(|_| malformed())?,
        };

        Self::from_major(major)
            .and_then(|amount| amount.checked_add(Self(minor)))
            .ok_or_else(malformed)
    }
}

impl From<CurrencyAmount> for String {
    fn from(value: CurrencyAmount) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CurrencyAmount {
    type Error = ParseCurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value, &[])
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.major_units(),
            self.0.rem_euclid(MINOR_PER_MAJOR)
        )
    }
}
