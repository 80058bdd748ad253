//! Rounding example.
//!
//! Demonstrates rounding strategies: per-operation rounding, the seven
//! rounding modes, negative precisions and changing the strategy of an
//! existing percentage.
//!
//! # Run
//!
//! ```bash
//! cargo run --example rounding
//! ```

use log::{LevelFilter, info};
use percentage::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("=== Rounding ===");

    // ── 1. Rounding applies to results, never to the decimal ────────────
    let exact = Percentage::of(23);
    let rounded = Percentage::of_precision(23, 2);
    info!("23% of 57 unrounded: {}", exact.times(57));
    info!("23% of 57 rounded:   {}", rounded.times(57));
    info!("decimal of both:     {} / {}", exact.decimal(), rounded.decimal());

    // ── 2. Every mode on the same value ─────────────────────────────────
    let pi = Percentage::of(std::f64::consts::PI * 100.0);
    info!("\n{pi} of 1 at two and three digits:");
    for mode in RoundingMode::ALL {
        let two = pi.with_rounding(Rounding::to_mode(2, mode));
        let three = two.with_precision(3);
        info!(
            "  {mode:<10} {:<6} {:<6} ({})",
            two.times(1),
            three.times(1),
            mode.description()
        );
    }

    // ── 3. Ties are decided on decimal digits ───────────────────────────
    let tie = 1.005;
    for mode in [RoundingMode::HalfUp, RoundingMode::HalfDown, RoundingMode::HalfEven] {
        info!("  {tie} {mode:<9} -> {}", Rounding::to_mode(2, mode).round(tie));
    }

    // ── 4. Negative precision rounds left of the point ──────────────────
    let commission = Percentage::of_precision(3.5, -2);
    info!(
        "\n3.5% of 48 750 to the hundred: {} ({})",
        commission.times(48_750),
        commission.rounding()
    );

    // ── 5. Rounded chains round every step ──────────────────────────────
    let growth = 33_i32.relative_change_with_precision(77, 4)?;
    let grown = 100.0_f64 + growth;
    info!("\n100 + {growth} = {grown}");
    info!("10% of that at 2 digits = {}", grown * 10_i32.percent_with_precision(2));

    // ── 6. Display follows the precision ────────────────────────────────
    let third = Percentage::ratio_of(1, 3)?;
    for precision in [0, 1, 4] {
        info!("  1/3 at {precision}: {}", third.with_precision(precision));
    }
    info!("  1/3 unrounded: {third}");

    Ok(())
}
