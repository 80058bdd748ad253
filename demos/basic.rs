//! Basic percentage example.
//!
//! Demonstrates creating percentages, applying them to numbers, deriving
//! them from ratios and relative changes, and chaining number-side
//! operators.
//!
//! # Run
//!
//! ```bash
//! cargo run --example basic
//! RUST_LOG=debug cargo run --example basic
//! ```

use log::{LevelFilter, debug, info};
use percentage::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("=== Percentages ===");

    // ── 1. Create a percentage ──────────────────────────────────────────
    let vat = Percentage::of(21);
    info!("VAT: {vat} (decimal {})", vat.decimal());

    // ── 2. Apply it to a price ──────────────────────────────────────────
    let net = 250.0;
    info!("  Tax on {net}:       {}", vat.times(net));
    info!("  Gross price:       {}", vat.increase(net));
    info!("  Net after refund:  {}", vat.decrease(vat.increase(net)));

    // ── 3. What is the base value? ──────────────────────────────────────
    let tax = 52.5;
    info!("  {tax} is {vat} of   {}", vat.value_when(tax)?);

    // ── 4. Derive percentages from numbers ──────────────────────────────
    let share = Percentage::ratio_of(1, 4)?;
    let growth = Percentage::relative_change(40, 50)?;
    info!("\n1 of 4 is {share}; 40 -> 50 is {growth}");
    debug!("share == growth: {}", share == growth);

    // ── 5. Zero divisors are errors ─────────────────────────────────────
    match Percentage::relative_change(0, 10) {
        Ok(p) => info!("unexpected change: {p}"),
        Err(e) => info!("0 -> 10: {e}"),
    }
    if let Err(e) = Percentage::ZERO.value_when(10) {
        info!("0% of what is 10? {e}");
    }

    // ── 6. Number-side operators ────────────────────────────────────────
    let expression = 50.0_f64 * 50_i32.percent() + 25_i32.percent();
    info!("\n50 * 50% + 25% = {expression}");

    let there_and_back = 33.0_f64 + 5_i32.percent() - 5_i32.percent();
    info!("33 + 5% - 5%   = {there_and_back}");

    let base = 7_i32.value_when(80_i32.percent())?;
    info!("100 * (7 is 80% of {base}) + 25% = {}", 100.0 * base + share);

    // ── 7. Sort a collection ────────────────────────────────────────────
    let mut rates = vec![
        Percentage::of(12.5),
        Percentage::of(-3),
        Percentage::of_precision(12.5, 2),
        Percentage::of(0.75),
    ];
    rates.sort();
    let sorted: Vec<String> = rates.iter().map(ToString::to_string).collect();
    info!("\nSorted: [{}]", sorted.join(", "));

    Ok(())
}
