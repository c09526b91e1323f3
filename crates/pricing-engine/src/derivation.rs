//! Default daily and hybrid prices seeded from the monthly price

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::price::round2;

/// Fractions of the monthly price used to seed the dependent slots
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub daily_from_monthly: f64,
    pub hybrid_from_monthly: f64,
}

impl Coefficients {
    pub const STANDARD: Coefficients = Coefficients {
        daily_from_monthly: constants::DAILY_FROM_MONTHLY,
        hybrid_from_monthly: constants::HYBRID_FROM_MONTHLY,
    };

    pub fn derive(&self, monthly: f64) -> DerivedPrices {
        DerivedPrices {
            daily: round2(monthly * self.daily_from_monthly),
            hybrid: round2(monthly * self.hybrid_from_monthly),
        }
    }
}

/// Dependent prices freshly derived from a monthly price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedPrices {
    pub daily: f64,
    pub hybrid: f64,
}

/// Derive dependent prices with the standard coefficients
pub fn derive(monthly: f64) -> DerivedPrices {
    Coefficients::STANDARD.derive(monthly)
}
