//! The three price slots and the rules for editing them

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::constants;
use crate::derivation::{Coefficients, DerivedPrices};
use crate::price::{Price, parse_price, round2};
use crate::projection::AnchorUnit;

/// Which price slot an edit or toggle targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Monthly,
    Daily,
    Hybrid,
}

impl SlotKind {
    /// Display order used by earnings output
    pub const EARNINGS_ORDER: [SlotKind; 3] = [SlotKind::Daily, SlotKind::Hybrid, SlotKind::Monthly];

    /// Calendar unit the slot's price is denominated in
    pub fn anchor_unit(self) -> AnchorUnit {
        match self {
            SlotKind::Monthly => AnchorUnit::Month,
            SlotKind::Daily => AnchorUnit::Day,
            SlotKind::Hybrid => AnchorUnit::Week,
        }
    }

    /// Daily and hybrid are seeded from monthly
    pub fn is_dependent(self) -> bool {
        !matches!(self, SlotKind::Monthly)
    }
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotKind::Monthly => write!(f, "Monthly"),
            SlotKind::Daily => write!(f, "Daily"),
            SlotKind::Hybrid => write!(f, "Hybrid"),
        }
    }
}

/// A stored price plus its enabled flag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSlot {
    pub value: Price,
    pub enabled: bool,
}

/// How the monthly price compares to the market benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketStatus {
    Matches,
    TooLow,
}

/// Result of a monthly edit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonthlyEdit {
    /// New positive price stored; dependent slots reseeded
    Derived(DerivedPrices),
    /// Parsed price equals the stored one; dependent slots untouched
    Unchanged,
    /// No positive price in the input; monthly is now unset
    Cleared,
}

/// Holds the monthly, daily and hybrid slots for one session
#[derive(Debug, Clone, PartialEq)]
pub struct RateModel {
    monthly: PriceSlot,
    daily: PriceSlot,
    hybrid: PriceSlot,
    recommended: f64,
    coefficients: Coefficients,
}

impl Default for RateModel {
    fn default() -> Self {
        Self::new(&PricingConfig::default())
    }
}

impl RateModel {
    /// Monthly starts unset; daily/hybrid hold the configured placeholders
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            monthly: PriceSlot {
                value: Price::Unset,
                enabled: true,
            },
            daily: PriceSlot {
                value: Price::Value(round2(config.placeholders.daily)),
                enabled: true,
            },
            hybrid: PriceSlot {
                value: Price::Value(round2(config.placeholders.hybrid)),
                enabled: true,
            },
            recommended: config.market.recommended_monthly,
            coefficients: Coefficients::STANDARD,
        }
    }

    pub fn slot(&self, kind: SlotKind) -> &PriceSlot {
        match kind {
            SlotKind::Monthly => &self.monthly,
            SlotKind::Daily => &self.daily,
            SlotKind::Hybrid => &self.hybrid,
        }
    }

    fn slot_mut(&mut self, kind: SlotKind) -> &mut PriceSlot {
        match kind {
            SlotKind::Monthly => &mut self.monthly,
            SlotKind::Daily => &mut self.daily,
            SlotKind::Hybrid => &mut self.hybrid,
        }
    }

    pub fn recommended(&self) -> f64 {
        self.recommended
    }

    /// The single "ready" flag: a positive finite monthly price is stored
    pub fn is_configured(&self) -> bool {
        matches!(self.monthly.value, Price::Value(v) if v.is_finite() && v > 0.0)
    }

    /// Store a monthly price from raw field text
    ///
    /// A new positive value reseeds daily and hybrid, discarding manual edits.
    pub fn set_monthly(&mut self, raw: &str) -> MonthlyEdit {
        let Some(parsed) = parse_price(raw).map(round2).filter(|v| *v > 0.0) else {
            if self.monthly.value.is_set() {
                tracing::debug!(raw, "monthly price cleared");
            }
            self.monthly.value = Price::Unset;
            return MonthlyEdit::Cleared;
        };

        if self.monthly.value == Price::Value(parsed) {
            return MonthlyEdit::Unchanged;
        }

        self.monthly.value = Price::Value(parsed);
        let derived = self.coefficients.derive(parsed);
        self.daily.value = Price::Value(derived.daily);
        self.hybrid.value = Price::Value(derived.hybrid);
        tracing::debug!(
            monthly = parsed,
            daily = derived.daily,
            hybrid = derived.hybrid,
            "dependent prices derived"
        );
        MonthlyEdit::Derived(derived)
    }

    /// Store a daily price from raw field text; returns whether it was accepted
    pub fn set_daily(&mut self, raw: &str) -> bool {
        self.set_dependent(SlotKind::Daily, raw)
    }

    /// Store a hybrid price from raw field text; returns whether it was accepted
    pub fn set_hybrid(&mut self, raw: &str) -> bool {
        self.set_dependent(SlotKind::Hybrid, raw)
    }

    fn set_dependent(&mut self, kind: SlotKind, raw: &str) -> bool {
        if !self.is_configured() || !self.slot(kind).enabled {
            tracing::debug!(slot = %kind, "edit ignored: row not editable");
            return false;
        }
        let Some(parsed) = parse_price(raw) else {
            return false;
        };
        self.slot_mut(kind).value = Price::Value(round2(parsed));
        true
    }

    /// Flip a slot's enabled flag; stored values are kept
    ///
    /// Dependent toggles are inert until monthly is configured.
    pub fn toggle_enabled(&mut self, kind: SlotKind) -> bool {
        if kind.is_dependent() && !self.is_configured() {
            tracing::debug!(slot = %kind, "toggle ignored: monthly price not configured");
            return false;
        }
        let slot = self.slot_mut(kind);
        slot.enabled = !slot.enabled;
        true
    }

    /// Compare the monthly price to the recommended benchmark
    pub fn status_flag(&self) -> Option<MarketStatus> {
        if !self.is_configured() {
            return None;
        }
        let monthly = self.monthly.value.value()?;
        if (monthly - self.recommended).abs() < constants::MARKET_MATCH_TOLERANCE {
            Some(MarketStatus::Matches)
        } else if monthly < self.recommended {
            Some(MarketStatus::TooLow)
        } else {
            None
        }
    }
}
