use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Self {
        assert!(value.is_finite(), "price must be finite");
        assert!(value >= 0.0, "price must be non-negative");

        Price(value)
    }

    pub fn try_new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Price(value))
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.2}", self.0)
    }
}

/// Parses the string-encoded decimals quote APIs send, e.g. `"123.4500"`.
impl FromStr for Price {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
            bail!("price is not available: {raw:?}");
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| anyhow!("price is not numeric: {raw:?}"))?;

        Price::try_new(value).ok_or_else(|| anyhow!("price out of range: {raw:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_encoded_decimal() {
        let price: Price = "123.4500".parse().unwrap();
        assert_eq!(price.as_f64(), 123.45);
        assert_eq!(price.to_string(), "123.45");
    }

    #[test]
    fn rejects_placeholders_and_garbage() {
        assert!("".parse::<Price>().is_err());
        assert!("   ".parse::<Price>().is_err());
        assert!("N/A".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
        assert!("-1.0".parse::<Price>().is_err());
        assert!("NaN".parse::<Price>().is_err());
        assert!("inf".parse::<Price>().is_err());
    }

    #[test]
    fn zero_is_a_valid_price() {
        assert_eq!(Price::try_new(0.0), Some(Price::new(0.0)));
    }
}
