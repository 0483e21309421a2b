//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic is done with `Decimal` internally and converted back to
//! `f64` for storage/serialization. Order totals are computed exactly once,
//! at creation, from server-trusted menu prices.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Rounding: 2 decimal places, half-up
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total: unit_price × quantity, rounded to 2 dp
pub fn line_total(unit_price: f64, quantity: i32) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Computed order totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub service_charge: f64,
    pub total_amount: f64,
}

/// Compute order totals from (unit_price, quantity) lines and the cafe's
/// percentage rates.
///
/// subtotal = Σ(unit_price × quantity)
/// tax = subtotal × tax_rate / 100
/// service_charge = subtotal × service_charge_rate / 100
/// total_amount = subtotal + tax + service_charge
///
/// Each component is rounded to 2 dp half-up.
pub fn compute_totals(lines: &[(f64, i32)], tax_rate: f64, service_charge_rate: f64) -> OrderTotals {
    let subtotal: Decimal = lines
        .iter()
        .map(|(price, qty)| to_decimal(*price) * Decimal::from(*qty))
        .sum();

    let tax = subtotal * to_decimal(tax_rate) / Decimal::ONE_HUNDRED;
    let service = subtotal * to_decimal(service_charge_rate) / Decimal::ONE_HUNDRED;

    let subtotal_r = subtotal
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let tax_r = tax.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let service_r =
        service.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    OrderTotals {
        subtotal: to_f64(subtotal_r),
        tax: to_f64(tax_r),
        service_charge: to_f64(service_r),
        total_amount: to_f64(subtotal_r + tax_r + service_r),
    }
}
