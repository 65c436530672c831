//! Response DTOs for catalog and cart endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::format_money;
use super::catalog::{Catalog, MandatoryFee};
use super::models::{LineKind, Quote};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    pub display: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
            display: format_money(amount, currency),
        }
    }
}

/// A catalog entry
#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub name: String,
    pub price: MoneyResponse,
}

/// Response for the catalog listing
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub services: Vec<ServiceResponse>,
    pub mandatory_fee: FeeResponse,
}

/// The mandatory fee as shown to the client
#[derive(Debug, Serialize)]
pub struct FeeResponse {
    pub label: String,
    pub amount: MoneyResponse,
}

impl CatalogResponse {
    pub fn new(catalog: &Catalog, fee: &MandatoryFee, currency: &str) -> Self {
        Self {
            services: catalog
                .services()
                .iter()
                .map(|s| ServiceResponse {
                    name: s.name.clone(),
                    price: MoneyResponse::new(s.price, currency),
                })
                .collect(),
            mandatory_fee: FeeResponse {
                label: fee.label.clone(),
                amount: MoneyResponse::new(fee.amount, currency),
            },
        }
    }
}

/// One cart line. Only service lines carry a removable position.
#[derive(Debug, Serialize)]
pub struct CartLineResponse {
    pub name: String,
    pub price: MoneyResponse,
    pub kind: LineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

/// Response for cart operations
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    pub total: MoneyResponse,
    pub deposit: MoneyResponse,
    pub changed: bool,
}

impl CartResponse {
    pub fn new(quote: &Quote, changed: bool) -> Self {
        let mut position = 0;
        let items = quote
            .line_items
            .iter()
            .map(|line| {
                let line_position = match line.kind {
                    LineKind::Service => {
                        position += 1;
                        Some(position - 1)
                    }
                    LineKind::MandatoryFee => None,
                };
                CartLineResponse {
                    name: line.name.clone(),
                    price: MoneyResponse::new(line.price, &quote.currency),
                    kind: line.kind,
                    position: line_position,
                }
            })
            .collect();

        Self {
            items,
            total: MoneyResponse::new(quote.total, &quote.currency),
            deposit: MoneyResponse::new(quote.deposit, &quote.currency),
            changed,
        }
    }
}
