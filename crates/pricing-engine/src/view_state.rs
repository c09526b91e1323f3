//! What the presentation layer may show or edit

use serde::{Deserialize, Serialize};

use crate::rate_model::{RateModel, SlotKind};

/// Availability chip shown next to a configured slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chip {
    Enabled,
    Disabled,
}

/// Per-slot gating derived from the rate model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAccess {
    /// The enable/disable toggle reacts to clicks
    pub toggle_available: bool,
    /// The price input row is shown
    pub editable: bool,
    /// The card renders as a muted placeholder
    pub muted: bool,
    pub chip: Option<Chip>,
}

/// Earnings panel form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EarningsView {
    pub expanded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    earnings: EarningsView,
}

impl ViewState {
    pub fn earnings(&self) -> EarningsView {
        self.earnings
    }

    /// Switch between the summary pills and the full breakdown
    pub fn toggle_expanded(&mut self) {
        self.earnings.expanded = !self.earnings.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.earnings.expanded
    }

    /// Gate a slot's controls on the current rate model
    pub fn access(&self, rates: &RateModel, kind: SlotKind) -> SlotAccess {
        let configured = rates.is_configured();
        let enabled = rates.slot(kind).enabled;
        let chip = configured.then_some(if enabled { Chip::Enabled } else { Chip::Disabled });

        if kind.is_dependent() {
            SlotAccess {
                toggle_available: configured,
                editable: configured && enabled,
                muted: !configured || !enabled,
                chip,
            }
        } else {
            SlotAccess {
                toggle_available: true,
                editable: enabled,
                muted: !enabled,
                chip,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expanded_twice_restores() {
        let mut view = ViewState::default();
        assert!(!view.is_expanded());
        view.toggle_expanded();
        assert!(view.is_expanded());
        view.toggle_expanded();
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn test_dependent_rows_muted_until_configured() {
        let view = ViewState::default();
        let rates = RateModel::default();

        for kind in [SlotKind::Daily, SlotKind::Hybrid] {
            let access = view.access(&rates, kind);
            assert!(!access.toggle_available);
            assert!(!access.editable);
            assert!(access.muted);
            assert_eq!(access.chip, None);
        }

        let monthly = view.access(&rates, SlotKind::Monthly);
        assert!(monthly.toggle_available);
        assert!(monthly.editable);
        assert!(!monthly.muted);
        assert_eq!(monthly.chip, None);
    }

    #[test]
    fn test_access_once_configured() {
        let view = ViewState::default();
        let mut rates = RateModel::default();
        rates.set_monthly("200");
        rates.toggle_enabled(SlotKind::Hybrid);

        let daily = view.access(&rates, SlotKind::Daily);
        assert!(daily.toggle_available && daily.editable && !daily.muted);
        assert_eq!(daily.chip, Some(Chip::Enabled));

        let hybrid = view.access(&rates, SlotKind::Hybrid);
        assert!(hybrid.toggle_available);
        assert!(!hybrid.editable);
        assert!(hybrid.muted);
        assert_eq!(hybrid.chip, Some(Chip::Disabled));
    }

    #[test]
    fn test_disabled_monthly_row_not_editable() {
        let view = ViewState::default();
        let mut rates = RateModel::default();
        rates.set_monthly("200");
        rates.toggle_enabled(SlotKind::Monthly);

        let monthly = view.access(&rates, SlotKind::Monthly);
        assert!(monthly.toggle_available);
        assert!(!monthly.editable);
        assert!(monthly.muted);
        assert_eq!(monthly.chip, Some(Chip::Disabled));

        rates.toggle_enabled(SlotKind::Monthly);
        assert!(view.access(&rates, SlotKind::Monthly).editable);
    }

    #[test]
    fn test_clearing_monthly_collapses_dependents() {
        let view = ViewState::default();
        let mut rates = RateModel::default();
        rates.set_monthly("200");
        rates.set_daily("30");
        rates.set_monthly("");

        let daily = view.access(&rates, SlotKind::Daily);
        assert!(daily.muted && !daily.editable && !daily.toggle_available);
        assert_eq!(rates.slot(SlotKind::Daily).value, crate::price::Price::Value(30.0));
    }
}
