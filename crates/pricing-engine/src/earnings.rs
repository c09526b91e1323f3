//! Earnings panel data: net-per-unit pills or the four-horizon breakdown

use serde::{Deserialize, Serialize};

use crate::commission::CommissionPolicy;
use crate::price::Price;
use crate::projection::Calendar;
use crate::rate_model::{RateModel, SlotKind};

/// Summary pill: net price in the slot's native unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPill {
    pub slot: SlotKind,
    pub label: String,
    pub net: Price,
}

/// Breakdown row: one slot's net projected over every horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub slot: SlotKind,
    pub label: String,
    pub day: Price,
    pub week: Price,
    pub month: Price,
    pub year: Price,
}

impl BreakdownRow {
    fn unset(slot: SlotKind) -> Self {
        Self {
            slot,
            label: row_label(slot),
            day: Price::Unset,
            week: Price::Unset,
            month: Price::Unset,
            year: Price::Unset,
        }
    }

    pub fn cells(&self) -> [Price; 4] {
        [self.day, self.week, self.month, self.year]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "entries", rename_all = "snake_case")]
pub enum Earnings {
    Summary(Vec<SummaryPill>),
    Breakdown(Vec<BreakdownRow>),
}

fn row_label(slot: SlotKind) -> String {
    format!("{} Parking", slot)
}

/// Net-to-host per native unit, or `Unset` while not configured
pub fn net_per_unit(rates: &RateModel, commission: &CommissionPolicy, slot: SlotKind) -> Price {
    if !rates.is_configured() {
        return Price::Unset;
    }
    rates.slot(slot).value.map(|gross| commission.net(gross))
}

/// Three pills ordered daily, hybrid, monthly
pub fn summary(rates: &RateModel, commission: &CommissionPolicy) -> Vec<SummaryPill> {
    SlotKind::EARNINGS_ORDER
        .into_iter()
        .map(|slot| SummaryPill {
            slot,
            label: slot.to_string(),
            net: net_per_unit(rates, commission, slot),
        })
        .collect()
}

/// Three projection rows ordered daily, hybrid, monthly
///
/// Each row projects from its own slot's net; rows need not agree.
pub fn breakdown(rates: &RateModel, commission: &CommissionPolicy, calendar: &Calendar) -> Vec<BreakdownRow> {
    SlotKind::EARNINGS_ORDER
        .into_iter()
        .map(|slot| match net_per_unit(rates, commission, slot) {
            Price::Unset => BreakdownRow::unset(slot),
            Price::Value(net) => {
                let projection = calendar.project(net, slot.anchor_unit());
                BreakdownRow {
                    slot,
                    label: row_label(slot),
                    day: Price::Value(projection.day),
                    week: Price::Value(projection.week),
                    month: Price::Value(projection.month),
                    year: Price::Value(projection.year),
                }
            }
        })
        .collect()
}
