//! Derived pricing values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a quote line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Service,
    MandatoryFee,
}

/// A priced line on a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub kind: LineKind,
}

/// Quote for a selection. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub line_items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub deposit: Decimal,
    pub currency: String,
}

impl Quote {
    /// Lines the user picked (excludes the mandatory fee)
    pub fn service_lines(&self) -> impl Iterator<Item = &LineItem> {
        self.line_items
            .iter()
            .filter(|line| line.kind == LineKind::Service)
    }

    pub fn has_fee(&self) -> bool {
        self.line_items
            .iter()
            .any(|line| line.kind == LineKind::MandatoryFee)
    }

    /// Amount still owed after the deposit
    pub fn remaining_balance(&self) -> Decimal {
        self.total - self.deposit
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}
