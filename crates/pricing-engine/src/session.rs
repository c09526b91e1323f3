//! Session state and the event reducer
//!
//! A `Session` owns one rate model and one view state. Every inbound event is
//! applied to completion before `apply` returns, so a snapshot taken after
//! any call is consistent.

use serde::{Deserialize, Serialize};

use crate::commission::CommissionPolicy;
use crate::config::PricingConfig;
use crate::earnings::{self, BreakdownRow, Earnings};
use crate::price::Price;
use crate::projection::Calendar;
use crate::rate_model::{MarketStatus, MonthlyEdit, RateModel, SlotKind};
use crate::view_state::{SlotAccess, ViewState};

/// Inbound event from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    EditMonthly { raw: String },
    EditDaily { raw: String },
    EditHybrid { raw: String },
    Toggle { slot: SlotKind },
    ToggleExpanded,
}

/// What an applied event changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Applied {
    Monthly(MonthlyEdit),
    /// Dependent edit or toggle; `false` when the control was inert
    Accepted(bool),
    ViewToggled,
}

/// Read-only view of one slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub slot: SlotKind,
    pub configured: bool,
    pub value: Price,
    pub enabled: bool,
    pub access: SlotAccess,
}

/// Everything the presentation layer needs to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub configured: bool,
    pub recommended: f64,
    pub status: Option<MarketStatus>,
    pub host_share_percent: f64,
    pub monthly: SlotSnapshot,
    pub daily: SlotSnapshot,
    pub hybrid: SlotSnapshot,
    pub earnings: Earnings,
}

impl SessionSnapshot {
    pub fn slot(&self, kind: SlotKind) -> &SlotSnapshot {
        match kind {
            SlotKind::Monthly => &self.monthly,
            SlotKind::Daily => &self.daily,
            SlotKind::Hybrid => &self.hybrid,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    rates: RateModel,
    view: ViewState,
    commission: CommissionPolicy,
    calendar: Calendar,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&PricingConfig::default())
    }
}

impl Session {
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            rates: RateModel::new(config),
            view: ViewState::default(),
            commission: CommissionPolicy::STANDARD,
            calendar: Calendar::STANDARD,
        }
    }

    pub fn rates(&self) -> &RateModel {
        &self.rates
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn apply(&mut self, event: &Event) -> Applied {
        tracing::trace!(?event, "applying event");
        match event {
            Event::EditMonthly { raw } => Applied::Monthly(self.rates.set_monthly(raw)),
            Event::EditDaily { raw } => Applied::Accepted(self.rates.set_daily(raw)),
            Event::EditHybrid { raw } => Applied::Accepted(self.rates.set_hybrid(raw)),
            Event::Toggle { slot } => Applied::Accepted(self.rates.toggle_enabled(*slot)),
            Event::ToggleExpanded => {
                self.view.toggle_expanded();
                Applied::ViewToggled
            }
        }
    }

    /// Apply events in order
    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a Event>) {
        for event in events {
            self.apply(event);
        }
    }

    fn slot_snapshot(&self, kind: SlotKind) -> SlotSnapshot {
        let slot = self.rates.slot(kind);
        SlotSnapshot {
            slot: kind,
            configured: self.rates.is_configured(),
            value: slot.value,
            enabled: slot.enabled,
            access: self.view.access(&self.rates, kind),
        }
    }

    /// Full projection table regardless of the earnings view
    pub fn breakdown(&self) -> Vec<BreakdownRow> {
        earnings::breakdown(&self.rates, &self.commission, &self.calendar)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let earnings = if self.view.is_expanded() {
            Earnings::Breakdown(self.breakdown())
        } else {
            Earnings::Summary(earnings::summary(&self.rates, &self.commission))
        };

        SessionSnapshot {
            configured: self.rates.is_configured(),
            recommended: self.rates.recommended(),
            status: self.rates.status_flag(),
            host_share_percent: self.commission.host_share_percent(),
            monthly: self.slot_snapshot(SlotKind::Monthly),
            daily: self.slot_snapshot(SlotKind::Daily),
            hybrid: self.slot_snapshot(SlotKind::Hybrid),
            earnings,
        }
    }
}
