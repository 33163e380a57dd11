//! Card expiration dates.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::GatewayError;

static EXPIRATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})/([0-9]{2})$").expect("expiration pattern is valid"));

/// Expiration date as entered by the cardholder (`MM/YY`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expiration {
    month: String,
    year: String,
}

impl Expiration {
    /// Parses `MM/YY`. The month is not range checked; the gateway does that.
    pub fn parse(raw: &str) -> Result<Self, GatewayError> {
        let captures = EXPIRATION_PATTERN
            .captures(raw)
            .ok_or_else(|| GatewayError::InvalidExpirationFormat(raw.to_string()))?;

        Ok(Self {
            month: captures[1].to_string(),
            year: captures[2].to_string(),
        })
    }

    /// Gateway representation, `MMYY`.
    pub fn to_gateway_format(&self) -> String {
        format!("{}{}", self.month, self.year)
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

/// Converts `"05/15"` into `"0515"`.
pub fn to_gateway_expiration(raw: &str) -> Result<String, GatewayError> {
    Expiration::parse(raw).map(|exp| exp.to_gateway_format())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separator() {
        assert_eq!(to_gateway_expiration("05/15").unwrap(), "0515");
        assert_eq!(to_gateway_expiration("12/29").unwrap(), "1229");
    }

    #[test]
    fn display_keeps_cardholder_format() {
        let exp = Expiration::parse("01/27").unwrap();
        assert_eq!(exp.to_string(), "01/27");
    }

    #[test]
    fn rejects_other_shapes() {
        for raw in ["0515", "5/15", "05/2015", "05-15", "", "ab/cd", "05/15 "] {
            assert!(
                matches!(
                    to_gateway_expiration(raw),
                    Err(GatewayError::InvalidExpirationFormat(_))
                ),
                "expected rejection for {:?}",
                raw
            );
        }
    }
}
