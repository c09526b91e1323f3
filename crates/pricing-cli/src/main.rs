//! Parking rental pricing calculator
//!
//! Drives the pricing engine from the terminal: enter a monthly price,
//! optionally override the derived daily and hybrid prices, and see the
//! host's projected earnings after platform fees.

mod config;
mod reports;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pricing_engine::{AnchorUnit, CommissionPolicy, Event, Session, SlotKind, price};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "parking-pricing")]
#[command(about = "Pricing and earnings calculator for parking-rental hosts")]
struct Args {
    /// Pricing config file (default: ./pricing.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configure prices and show projected earnings
    Quote {
        /// Monthly price text (non-numeric characters are ignored)
        #[arg(long)]
        monthly: String,

        /// Override the derived daily price
        #[arg(long)]
        daily: Option<String>,

        /// Override the derived hybrid (weekly) price
        #[arg(long)]
        hybrid: Option<String>,

        /// Disable monthly bookings
        #[arg(long)]
        disable_monthly: bool,

        /// Disable daily bookings
        #[arg(long)]
        disable_daily: bool,

        /// Disable hybrid bookings
        #[arg(long)]
        disable_hybrid: bool,

        /// Show the comprehensive day/week/month/year breakdown
        #[arg(long)]
        expanded: bool,

        /// Print the snapshot as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Write the breakdown to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show the default daily and hybrid prices for a monthly price
    Derive {
        /// Monthly price
        monthly: String,
    },

    /// Show net-to-host after platform commission
    Net {
        /// Gross price
        #[arg(allow_negative_numbers = true)]
        gross: f64,
    },

    /// Project a net price across day, week, month and year
    Project {
        /// Net price
        #[arg(allow_negative_numbers = true)]
        net: f64,

        /// Unit the net price is denominated in
        #[arg(long, value_enum, default_value_t = Unit::Month)]
        unit: Unit,
    },

    /// Apply a JSON array of events and show the final state
    Replay {
        /// Path to JSON file with events
        file: PathBuf,

        /// Print the snapshot as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Unit {
    Day,
    Week,
    Month,
}

impl From<Unit> for AnchorUnit {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Day => AnchorUnit::Day,
            Unit::Week => AnchorUnit::Week,
            Unit::Month => AnchorUnit::Month,
        }
    }
}

/// Prices and toggles requested for a quote
struct QuoteRequest {
    monthly: String,
    daily: Option<String>,
    hybrid: Option<String>,
    disable: Vec<SlotKind>,
    expanded: bool,
}

impl QuoteRequest {
    /// Events in the order a user would produce them
    fn events(&self) -> Vec<Event> {
        let mut events = vec![Event::EditMonthly {
            raw: self.monthly.clone(),
        }];
        if let Some(raw) = &self.daily {
            events.push(Event::EditDaily { raw: raw.clone() });
        }
        if let Some(raw) = &self.hybrid {
            events.push(Event::EditHybrid { raw: raw.clone() });
        }
        events.extend(self.disable.iter().map(|slot| Event::Toggle { slot: *slot }));
        if self.expanded {
            events.push(Event::ToggleExpanded);
        }
        events
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let pricing = config::resolve(args.config.as_deref())?;
    tracing::debug!(
        recommended = pricing.market.recommended_monthly,
        daily = pricing.placeholders.daily,
        hybrid = pricing.placeholders.hybrid,
        "pricing config loaded"
    );

    match args.command {
        Command::Quote {
            monthly,
            daily,
            hybrid,
            disable_monthly,
            disable_daily,
            disable_hybrid,
            expanded,
            json,
            csv,
        } => {
            let disable = [
                (disable_monthly, SlotKind::Monthly),
                (disable_daily, SlotKind::Daily),
                (disable_hybrid, SlotKind::Hybrid),
            ]
            .into_iter()
            .filter_map(|(flag, slot)| flag.then_some(slot))
            .collect();

            let request = QuoteRequest {
                monthly,
                daily,
                hybrid,
                disable,
                expanded,
            };
            let mut session = Session::new(&pricing);
            session.apply_all(&request.events());
            show_session(&session, json, csv)
        }

        Command::Derive { monthly } => {
            let Some(value) = price::parse_price(&monthly).map(price::round2).filter(|v| *v > 0.0) else {
                anyhow::bail!("'{}' is not a positive monthly price", monthly);
            };
            reports::print_derived(value, &pricing_engine::derive(value));
            Ok(())
        }

        Command::Net { gross } => {
            if !gross.is_finite() {
                anyhow::bail!("Gross price must be a finite number");
            }
            reports::print_net(gross, &CommissionPolicy::STANDARD);
            Ok(())
        }

        Command::Project { net, unit } => {
            if !net.is_finite() {
                anyhow::bail!("Net price must be a finite number");
            }
            let unit = AnchorUnit::from(unit);
            reports::print_projection(&pricing_engine::project(net, unit), unit);
            Ok(())
        }

        Command::Replay { file, json } => {
            let content =
                std::fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file.display()))?;
            let events: Vec<Event> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse events from {}", file.display()))?;

            eprintln!("Replaying {} event(s) from {}...", events.len(), file.display());
            let mut session = Session::new(&pricing);
            for event in &events {
                let applied = session.apply(event);
                tracing::debug!(?event, ?applied, "event applied");
            }
            show_session(&session, json, None)
        }
    }
}

/// Render the session snapshot and optionally export the breakdown
fn show_session(session: &Session, json: bool, csv: Option<PathBuf>) -> Result<()> {
    let snapshot = session.snapshot();

    if json {
        reports::print_json(&snapshot)?;
    } else {
        reports::print_summary(&snapshot);
    }

    if let Some(path) = csv {
        reports::export_breakdown_csv(&session.breakdown(), &path)?;
        eprintln!("Breakdown written to {}", path.display());
    }

    Ok(())
}
