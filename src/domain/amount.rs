//! Amount conversion from decimal strings to integer minor units.
//!
//! The gateway expects amounts in the smallest currency unit (`"49.95"` is
//! sent as `4995`). Input must carry exactly two decimals; conversion uses
//! `rust_decimal` so no floating point rounding is involved.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::GatewayError;

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+\.[0-9]{2}$").expect("amount pattern is valid"));

/// An amount expressed in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinorUnits(i64);

impl MinorUnits {
    /// Parses a two-decimal amount string.
    pub fn parse(raw: &str) -> Result<Self, GatewayError> {
        if !AMOUNT_PATTERN.is_match(raw) {
            return Err(GatewayError::InvalidAmountFormat(raw.to_string()));
        }

        let invalid = || GatewayError::InvalidAmountFormat(raw.to_string());
        let amount = Decimal::from_str(raw).map_err(|_| invalid())?;
        let minor = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(invalid)?
            .trunc()
            .to_i64()
            .ok_or_else(invalid)?;

        Ok(Self(minor))
    }

    /// Raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converts `"49.95"` into `"4995"`.
pub fn to_minor_units(raw: &str) -> Result<String, GatewayError> {
    MinorUnits::parse(raw).map(|units| units.to_string())
}
