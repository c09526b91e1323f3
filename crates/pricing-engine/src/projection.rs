//! Time-unit extrapolation of net prices
//!
//! Each slot's native price is denominated in one calendar unit (its anchor)
//! and is converted to the other units with calendar averages. Results keep
//! full precision; rounding for display is left to the caller.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Calendar unit a price is denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorUnit {
    Day,
    Week,
    Month,
}

impl std::fmt::Display for AnchorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnchorUnit::Day => write!(f, "day"),
            AnchorUnit::Week => write!(f, "week"),
            AnchorUnit::Month => write!(f, "month"),
        }
    }
}

/// Calendar averaging constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calendar {
    pub days_per_week: f64,
    pub weeks_per_year: f64,
    pub months_per_year: f64,
    pub days_per_year: f64,
}

impl Calendar {
    pub const STANDARD: Calendar = Calendar {
        days_per_week: constants::DAYS_PER_WEEK,
        weeks_per_year: constants::WEEKS_PER_YEAR,
        months_per_year: constants::MONTHS_PER_YEAR,
        days_per_year: constants::DAYS_PER_YEAR,
    };

    pub fn weeks_per_month(&self) -> f64 {
        self.weeks_per_year / self.months_per_year
    }

    pub fn days_per_month(&self) -> f64 {
        self.days_per_year / self.months_per_year
    }

    /// Expand an anchor amount into day/week/month/year equivalents
    pub fn project(&self, anchor: f64, unit: AnchorUnit) -> Projection {
        match unit {
            AnchorUnit::Day => Projection {
                day: anchor,
                week: anchor * self.days_per_week,
                month: anchor * self.days_per_month(),
                year: anchor * self.days_per_year,
            },
            AnchorUnit::Week => Projection {
                day: anchor / self.days_per_week,
                week: anchor,
                month: anchor * self.weeks_per_month(),
                year: anchor * self.weeks_per_year,
            },
            AnchorUnit::Month => Projection {
                day: anchor / self.days_per_month(),
                week: anchor / self.weeks_per_month(),
                month: anchor,
                year: anchor * self.months_per_year,
            },
        }
    }
}

/// One amount expressed over the four horizons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub day: f64,
    pub week: f64,
    pub month: f64,
    pub year: f64,
}

/// Project with the standard calendar
pub fn project(anchor: f64, unit: AnchorUnit) -> Projection {
    Calendar::STANDARD.project(anchor, unit)
}
