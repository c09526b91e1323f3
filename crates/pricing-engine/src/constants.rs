//! Centralized constants for the pricing engine
//!
//! These values are fixed for every host and never change at runtime.
//! Session-specific values (market benchmark, placeholders) live in config.rs.

// =============================================================================
// Derivation Coefficients
// Default dependent prices as fractions of the monthly price
// =============================================================================

/// Daily price as a fraction of the monthly price
pub const DAILY_FROM_MONTHLY: f64 = 0.09;

/// Hybrid (weekly) price as a fraction of the monthly price
pub const HYBRID_FROM_MONTHLY: f64 = 0.485;

// =============================================================================
// Platform Commission
// =============================================================================

/// Share of every gross price kept by the platform
pub const COMMISSION_RATE: f64 = 0.30;

// =============================================================================
// Calendar Averaging
// =============================================================================

pub const DAYS_PER_WEEK: f64 = 7.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// ~4.3333 weeks in an average month
pub const WEEKS_PER_MONTH: f64 = WEEKS_PER_YEAR / MONTHS_PER_YEAR;

/// ~30.4167 days in an average month
pub const DAYS_PER_MONTH: f64 = DAYS_PER_YEAR / MONTHS_PER_YEAR;

// =============================================================================
// Session Defaults
// =============================================================================

/// Recommended monthly market rate used when no config overrides it
pub const DEFAULT_RECOMMENDED_MONTHLY: f64 = 200.0;

/// Daily placeholder shown before any monthly price is entered
pub const DEFAULT_DAILY_PLACEHOLDER: f64 = 18.0;

/// Hybrid placeholder shown before any monthly price is entered
pub const DEFAULT_HYBRID_PLACEHOLDER: f64 = 97.0;

// =============================================================================
// Thresholds
// =============================================================================

/// Monthly price within this distance of the benchmark counts as a match
pub const MARKET_MATCH_TOLERANCE: f64 = 0.005;
