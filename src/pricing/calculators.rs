//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no session or network access.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::catalog::MandatoryFee;
use super::models::{LineItem, LineKind, Quote};
use super::selection::SelectionSet;

/// Round half away from zero to the given number of decimal places.
///
/// Deposits are quoted in whole cedis, so an odd total splits upward.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use slay_booking::pricing::round_money;
///
/// assert_eq!(round_money(dec!(257.5), 0), dec!(258));
/// assert_eq!(round_money(dec!(130.0), 0), dec!(130));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Deposit owed up front for a total, in whole currency units.
pub fn calculate_deposit(total: Decimal, deposit_rate: Decimal) -> Decimal {
    round_money(total * deposit_rate, 0)
}

/// Build the quote for a selection.
///
/// An empty selection yields an empty quote: no lines, zero total, zero
/// deposit. Any non-empty selection carries the mandatory fee exactly once,
/// after the service lines.
pub fn compute_quote(
    selection: &SelectionSet,
    fee: &MandatoryFee,
    deposit_rate: Decimal,
    currency: &str,
) -> Quote {
    if selection.is_empty() {
        return Quote {
            line_items: vec![],
            total: Decimal::ZERO,
            deposit: Decimal::ZERO,
            currency: currency.to_string(),
        };
    }

    let mut line_items: Vec<LineItem> = selection
        .iter()
        .map(|service| LineItem {
            name: service.name.clone(),
            price: service.price,
            kind: LineKind::Service,
        })
        .collect();

    line_items.push(LineItem {
        name: fee.label.clone(),
        price: fee.amount,
        kind: LineKind::MandatoryFee,
    });

    let total: Decimal = line_items.iter().map(|line| line.price).sum();

    Quote {
        line_items,
        total,
        deposit: calculate_deposit(total, deposit_rate),
        currency: currency.to_string(),
    }
}

/// Format an amount the way the studio prints prices: `GHS 75.00`
pub fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{} {:.2}", currency, round_money(amount, 2))
}
