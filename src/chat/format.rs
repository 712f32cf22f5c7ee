//! Fixed-point rendering of wallet amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Render `value` with exactly `decimals` fraction digits.
///
/// Midpoints round away from zero (`0.03125` → `0.0313` at 4 places) and
/// `-0.0` renders unsigned. Values outside `Decimal` range use std formatting.
pub fn to_fixed(value: f64, decimals: u32) -> String {
    // -0.0 == 0.0, this drops the sign bit
    let value = if value == 0.0 { 0.0 } else { value };

    match Decimal::from_f64_retain(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", decimals as usize, rounded)
        }
        None => format!("{:.*}", decimals as usize, value),
    }
}
