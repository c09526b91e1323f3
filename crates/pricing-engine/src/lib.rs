//! Parking rental pricing engine
//!
//! Derives daily and hybrid prices from a host's monthly price, strips the
//! platform commission, and projects net earnings across day, week, month
//! and year. Rendering is left to the caller, which feeds `Event`s into a
//! `Session` and draws the resulting `SessionSnapshot`.

pub mod commission;
pub mod config;
pub mod constants;
pub mod derivation;
pub mod earnings;
pub mod price;
pub mod projection;
pub mod rate_model;
pub mod session;
pub mod view_state;

pub use commission::{CommissionPolicy, net};
pub use config::{ConfigError, PricingConfig};
pub use derivation::{Coefficients, DerivedPrices, derive};
pub use earnings::{BreakdownRow, Earnings, SummaryPill};
pub use price::{Price, round2};
pub use projection::{AnchorUnit, Calendar, Projection, project};
pub use rate_model::{MarketStatus, MonthlyEdit, PriceSlot, RateModel, SlotKind};
pub use session::{Applied, Event, Session, SessionSnapshot, SlotSnapshot};
pub use view_state::{Chip, EarningsView, SlotAccess, ViewState};
