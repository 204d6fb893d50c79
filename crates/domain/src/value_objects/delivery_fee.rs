//! Delivery fee value object

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A non-negative delivery fee in the shop's settlement currency
///
/// The logistics provider encodes totals as decimal strings; this type owns
/// the parse and the non-negativity check so callers only ever see a valid
/// amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFee(Decimal);

impl DeliveryFee {
    /// Create a fee from a decimal amount
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the amount is negative.
    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() {
            return Err(DomainError::InvalidAmount(amount.to_string()));
        }
        Ok(Self(amount))
    }

    /// Parse a fee from a string-encoded decimal (e.g. `"15.50"`)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the string is not a decimal
    /// number or encodes a negative amount.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|_| DomainError::InvalidAmount(s.to_string()))?;
        Self::new(amount)
    }

    /// The fee amount
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for DeliveryFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_fee() {
        let fee = DeliveryFee::parse("15.50").unwrap();
        assert_eq!(fee.amount(), Decimal::new(1550, 2));
    }

    #[test]
    fn parse_zero_fee() {
        let fee = DeliveryFee::parse("0").unwrap();
        assert_eq!(fee.amount(), Decimal::ZERO);
    }

    #[test]
    fn parse_trims_whitespace() {
        let fee = DeliveryFee::parse(" 8.00 ").unwrap();
        assert_eq!(fee.amount(), Decimal::new(800, 2));
    }

    #[test]
    fn parse_rejects_negative() {
        let err = DeliveryFee::parse("-3.20").unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmount(_)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(DeliveryFee::parse("free").is_err());
        assert!(DeliveryFee::parse("").is_err());
    }

    #[test]
    fn new_rejects_negative_decimal() {
        assert!(DeliveryFee::new(Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn display_uses_two_decimal_places() {
        let fee = DeliveryFee::parse("15.5").unwrap();
        assert_eq!(fee.to_string(), "15.50");
    }
}
