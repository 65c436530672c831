//! Pricing engine bound to the studio's business configuration.

use std::sync::Arc;

use crate::config::BusinessConfig;

use super::calculators::compute_quote;
use super::catalog::Service;
use super::models::Quote;
use super::selection::SelectionSet;

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Unknown service: {0}")]
    UnknownService(String),
}

/// Prices selections against an injected catalog and fee policy.
///
/// Cheap to clone; all configuration is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    business: Arc<BusinessConfig>,
}

impl PricingEngine {
    pub fn new(business: Arc<BusinessConfig>) -> Self {
        Self { business }
    }

    pub fn business(&self) -> &BusinessConfig {
        &self.business
    }

    /// Resolve a service name against the catalog
    pub fn service(&self, name: &str) -> Result<&Service, PricingError> {
        self.business
            .catalog
            .lookup(name)
            .ok_or_else(|| PricingError::UnknownService(name.to_string()))
    }

    /// Add a catalog service to a selection. Already-selected names are a no-op.
    pub fn select(&self, selection: &mut SelectionSet, name: &str) -> Result<bool, PricingError> {
        let service = self.service(name)?.clone();
        Ok(selection.add(service))
    }

    /// Toggle a catalog service in a selection
    pub fn toggle(&self, selection: &mut SelectionSet, name: &str) -> Result<bool, PricingError> {
        let service = self.service(name)?.clone();
        Ok(selection.toggle(service))
    }

    /// Quote a selection using the configured fee, deposit rate and currency
    pub fn quote(&self, selection: &SelectionSet) -> Quote {
        compute_quote(
            selection,
            &self.business.fee,
            self.business.deposit_rate,
            &self.business.currency,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn engine() -> PricingEngine {
        PricingEngine::new(Arc::new(BusinessConfig::default()))
    }

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::UnknownService("Ear Cuff".to_string());
        assert!(err.to_string().contains("Ear Cuff"));
    }

    #[test]
    fn test_select_unknown_service() {
        let engine = engine();
        let mut selection = SelectionSet::new();
        let err = engine.select(&mut selection, "Ear Cuff").unwrap_err();
        assert_eq!(err, PricingError::UnknownService("Ear Cuff".to_string()));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_uses_catalog_price() {
        let engine = engine();
        let mut selection = SelectionSet::new();
        assert!(engine.select(&mut selection, "Tongue").unwrap());
        assert!(!engine.select(&mut selection, "Tongue").unwrap());

        let quote = engine.quote(&selection);
        assert_eq!(quote.total, dec!(415));
        assert_eq!(quote.deposit, dec!(208));
        assert_eq!(quote.currency, "GHS");
    }

    #[test]
    fn test_toggle_through_engine() {
        let engine = engine();
        let mut selection = SelectionSet::new();
        assert!(engine.toggle(&mut selection, "Rook").unwrap());
        assert!(!engine.toggle(&mut selection, "Rook").unwrap());
        assert_eq!(engine.quote(&selection).total, dec!(0));
    }
}
