//! Platform commission and net-to-host arithmetic

use crate::constants;
use crate::price::round2;

/// Fixed commission taken from every gross price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionPolicy {
    pub rate: f64,
}

impl CommissionPolicy {
    pub const STANDARD: CommissionPolicy = CommissionPolicy {
        rate: constants::COMMISSION_RATE,
    };

    /// Fraction of the gross price kept by the host
    pub fn net_multiplier(&self) -> f64 {
        1.0 - self.rate
    }

    /// Host share as a whole percentage (70 for a 30% commission)
    pub fn host_share_percent(&self) -> f64 {
        (self.net_multiplier() * 100.0).round()
    }

    /// Net-to-host for a gross price, rounded to cents
    ///
    /// Zero and negative prices pass through unchanged in sign.
    pub fn net(&self, gross: f64) -> f64 {
        round2(gross * self.net_multiplier())
    }

    /// Platform's cut of a gross price, consistent with `net`
    pub fn platform_fee(&self, gross: f64) -> f64 {
        round2(gross - self.net(gross))
    }
}

/// Net-to-host under the standard commission
pub fn net(gross: f64) -> f64 {
    CommissionPolicy::STANDARD.net(gross)
}
