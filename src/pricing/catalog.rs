//! Service catalog and the mandatory treatment fee.
//!
//! The catalog is static configuration: it is built once at startup and
//! never mutated while the server runs.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A piercing service offered by the studio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub price: Decimal,
}

impl Service {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Surcharge added once to any non-empty selection. Never user-removable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandatoryFee {
    pub label: String,
    pub amount: Decimal,
}

impl Default for MandatoryFee {
    fn default() -> Self {
        Self {
            label: "Mandatory Treatment Package".to_string(),
            amount: Decimal::from(65),
        }
    }
}

/// Ordered list of services, unique by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    services: Vec<Service>,
}

/// Studio price list (GHS)
const STUDIO_PRICES: &[(&str, i64)] = &[
    ("Baby Lobe", 85),
    ("Lobe", 75),
    ("Transverse", 100),
    ("Helix", 120),
    ("Tragus", 220),
    ("Conch", 200),
    ("Daith", 220),
    ("Forward Helix", 220),
    ("Snug", 200),
    ("Rook", 230),
    ("Industrial", 250),
    ("Surface", 250),
    ("Flat-Conch", 220),
    ("Anti-Tragus", 250),
    ("Nostril", 270),
    ("Septum", 250),
    ("Eyebrow", 300),
    ("Lip", 300),
    ("Tongue", 350),
    ("Smiley", 250),
    ("Nipple", 380),
    ("Belly", 320),
    ("Sternum", 350),
    ("Dermal", 450),
];

impl Catalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// The studio's published price list
    pub fn studio_default() -> Self {
        Self::new(
            STUDIO_PRICES
                .iter()
                .map(|(name, price)| Service::new(*name, Decimal::from(*price)))
                .collect(),
        )
    }

    /// Find a service by its exact name
    pub fn lookup(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Collect every problem with the catalog (duplicate names, bad prices).
    pub fn problems(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut problems = Vec::new();

        for service in &self.services {
            if service.name.trim().is_empty() {
                problems.push("service with empty name".to_string());
            }
            if !seen.insert(service.name.as_str()) {
                problems.push(format!("duplicate service '{}'", service.name));
            }
            if service.price < Decimal::ZERO {
                problems.push(format!(
                    "service '{}' has negative price {}",
                    service.name, service.price
                ));
            }
        }

        problems
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::studio_default()
    }
}
