//! Report generation (console summary, JSON and CSV outputs)

use anyhow::{Context, Result};
use csv::Writer;
use pricing_engine::{
    AnchorUnit, BreakdownRow, Chip, CommissionPolicy, DerivedPrices, Earnings, MarketStatus, Price, Projection,
    SessionSnapshot, SlotKind, SlotSnapshot,
};
use std::path::Path;

/// Placeholder printed where the engine has no value
pub const NO_VALUE: &str = "—";

/// Format a price as dollars with two decimals
pub fn format_price(price: Price) -> String {
    match price {
        Price::Unset => NO_VALUE.to_string(),
        Price::Value(v) => format!("${:.2}", normalize_zero(v)),
    }
}

/// Normalize -0.0 to 0.0 for cleaner display
fn normalize_zero(val: f64) -> f64 {
    if val == 0.0 { 0.0 } else { val }
}

fn unit_suffix(kind: SlotKind) -> &'static str {
    match kind {
        SlotKind::Monthly => "/month",
        SlotKind::Daily => "/day",
        SlotKind::Hybrid => "/week",
    }
}

fn status_text(status: Option<MarketStatus>) -> Option<&'static str> {
    match status? {
        MarketStatus::Matches => Some("Price matches market rate"),
        MarketStatus::TooLow => Some("Price rate too low"),
    }
}

fn print_slot(slot: &SlotSnapshot) {
    let chip = match slot.access.chip {
        Some(Chip::Enabled) => "[Enabled]",
        Some(Chip::Disabled) => "[Disabled]",
        None => "",
    };
    let value = if slot.access.muted {
        NO_VALUE.to_string()
    } else {
        format!("{}{}", format_price(slot.value), unit_suffix(slot.slot))
    };
    println!("  {:<10} {:>16}  {}", slot.slot.to_string(), value, chip);
}

/// Print the full snapshot to console
pub fn print_summary(snapshot: &SessionSnapshot) {
    println!("\n============================================================");
    println!("                    PRICING SUMMARY");
    println!("============================================================\n");

    println!("PRICES:");
    print_slot(&snapshot.monthly);
    print_slot(&snapshot.daily);
    print_slot(&snapshot.hybrid);
    println!("  Recommended monthly:  {}", format_price(Price::Value(snapshot.recommended)));
    if let Some(text) = status_text(snapshot.status) {
        println!("  Status:               {}", text);
    }

    println!("\nPOTENTIAL EARNINGS (you earn {:.0}% of every dollar):", snapshot.host_share_percent);
    match &snapshot.earnings {
        Earnings::Summary(pills) => {
            for pill in pills {
                println!("  {:<10} {:>16}  after platform fees", pill.label, format_price(pill.net));
            }
        }
        Earnings::Breakdown(rows) => {
            println!("  {:<17} {:>12} {:>12} {:>12} {:>12}", "", "/day", "/week", "/month", "/year");
            println!("  {}", "-".repeat(68));
            for row in rows {
                let [day, week, month, year] = row.cells().map(format_price);
                println!("  {:<17} {:>12} {:>12} {:>12} {:>12}", row.label, day, week, month, year);
            }
        }
    }

    if !snapshot.configured {
        println!("\n  Enter a monthly price to see earnings.");
    }
    println!("============================================================");
}

/// Print derived defaults for a monthly price
pub fn print_derived(monthly: f64, derived: &DerivedPrices) {
    println!("Monthly:  {}", format_price(Price::Value(monthly)));
    println!("Daily:    {}/day", format_price(Price::Value(derived.daily)));
    println!("Hybrid:   {}/week", format_price(Price::Value(derived.hybrid)));
}

/// Print net-to-host and the platform fee for a gross price
pub fn print_net(gross: f64, policy: &CommissionPolicy) {
    println!("Gross:         {}", format_price(Price::Value(gross)));
    println!(
        "Platform fee:  {} ({:.0}%)",
        format_price(Price::Value(policy.platform_fee(gross))),
        policy.rate * 100.0
    );
    println!("Net to host:   {}", format_price(Price::Value(policy.net(gross))));
}

/// Print one projection as a single row
pub fn print_projection(projection: &Projection, unit: AnchorUnit) {
    println!("Projected from a net price per {}:\n", unit);
    println!("{:>12} {:>12} {:>12} {:>12}", "/day", "/week", "/month", "/year");
    println!("{}", "-".repeat(51));
    println!(
        "{:>12} {:>12} {:>12} {:>12}",
        format_price(Price::Value(projection.day)),
        format_price(Price::Value(projection.week)),
        format_price(Price::Value(projection.month)),
        format_price(Price::Value(projection.year)),
    );
}

/// Print the snapshot as pretty JSON
pub fn print_json(snapshot: &SessionSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
    println!("{}", json);
    Ok(())
}

fn csv_cell(price: Price) -> String {
    match price {
        Price::Unset => String::new(),
        Price::Value(v) => format!("{:.2}", normalize_zero(v)),
    }
}

/// Write the four-horizon breakdown to CSV
///
/// Unset cells are written empty.
pub fn export_breakdown_csv(rows: &[BreakdownRow], path: &Path) -> Result<()> {
    let mut wtr = Writer::from_path(path).with_context(|| format!("Failed to create {}", path.display()))?;

    // Header
    wtr.write_record(["Slot", "Label", "Net_Day", "Net_Week", "Net_Month", "Net_Year"])?;

    for row in rows {
        let [day, week, month, year] = row.cells().map(csv_cell);
        wtr.write_record([row.slot.to_string(), row.label.clone(), day, week, month, year])?;
    }

    wtr.flush()?;
    Ok(())
}
