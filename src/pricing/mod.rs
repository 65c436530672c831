//! Pricing engine module for studio bookings.
//!
//! Prices a selection of piercing services plus the mandatory treatment fee,
//! and derives the deposit owed up front.

pub mod calculators;
pub mod catalog;
pub mod models;
pub mod requests;
pub mod responses;
pub mod selection;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_deposit, compute_quote, format_money, round_money};
pub use catalog::{Catalog, MandatoryFee, Service};
pub use models::{LineItem, LineKind, Quote};
pub use selection::{remove_from_selection, SelectionSet};
pub use services::{PricingEngine, PricingError};
