use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FareClass {
    #[default]
    Economy,
    Business,
    First,
}

impl FareClass {
    pub const ALL: [FareClass; 3] = [FareClass::Economy, FareClass::Business, FareClass::First];

    /// Currency units per km per passenger.
    pub fn rate_per_km(self) -> f64 {
        match self {
            FareClass::Economy => 0.12,
            FareClass::Business => 0.35,
            FareClass::First => 0.60,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FareClass::Economy => "economy",
            FareClass::Business => "business",
            FareClass::First => "first",
        }
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FareClass {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(FareClass::Economy),
            "business" => Ok(FareClass::Business),
            "first" => Ok(FareClass::First),
            other => Err(AppError::UnknownFareClass(other.to_string())),
        }
    }
}

/// How the traveller wants to check out. Only changes the button label,
/// no payment is ever processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Request,
}

impl FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "request" => Ok(PaymentMethod::Request),
            other => Err(AppError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        assert_eq!(FareClass::Economy.rate_per_km(), 0.12);
        assert_eq!(FareClass::Business.rate_per_km(), 0.35);
        assert_eq!(FareClass::First.rate_per_km(), 0.60);
    }

    #[test]
    fn test_parse_fare_class() {
        assert_eq!("Business".parse::<FareClass>(), Ok(FareClass::Business));
        assert_eq!(" first ".parse::<FareClass>(), Ok(FareClass::First));
        assert_eq!(
            "premium".parse::<FareClass>(),
            Err(AppError::UnknownFareClass("premium".to_string()))
        );
    }

    #[test]
    fn test_serde_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&FareClass::Business).unwrap(),
            "\"business\""
        );
        let method: PaymentMethod = serde_json::from_str("\"request\"").unwrap();
        assert_eq!(method, PaymentMethod::Request);
    }
}
