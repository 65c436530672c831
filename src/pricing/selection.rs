//! The user's in-progress set of chosen services.

use serde::{Deserialize, Serialize};

use super::catalog::Service;

/// Ordered selection of services, unique by name.
///
/// Insertion order is display order. Positions used by [`SelectionSet::remove_at`]
/// refer to this order, never to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    services: Vec<Service>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a service. Returns `false` if one with the same name is already selected.
    pub fn add(&mut self, service: Service) -> bool {
        if self.contains(&service.name) {
            return false;
        }
        self.services.push(service);
        true
    }

    /// Remove the service at a display position. Out of range is a no-op.
    pub fn remove_at(&mut self, position: usize) -> Option<Service> {
        if position < self.services.len() {
            Some(self.services.remove(position))
        } else {
            None
        }
    }

    /// Remove a service by name
    pub fn remove_named(&mut self, name: &str) -> Option<Service> {
        let position = self.services.iter().position(|s| s.name == name)?;
        self.remove_at(position)
    }

    /// Checkbox semantics: select if absent, deselect if present.
    /// Returns whether the service is selected afterwards.
    pub fn toggle(&mut self, service: Service) -> bool {
        if self.remove_named(&service.name).is_some() {
            false
        } else {
            self.services.push(service);
            true
        }
    }

    pub fn clear(&mut self) {
        self.services.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.iter().any(|s| s.name == name)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl FromIterator<Service> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Service>>(iter: I) -> Self {
        let mut selection = SelectionSet::new();
        for service in iter {
            selection.add(service);
        }
        selection
    }
}

/// Value-style removal: returns the selection without the service at `position`.
///
/// An out-of-range position returns the input unchanged.
pub fn remove_from_selection(mut selection: SelectionSet, position: usize) -> SelectionSet {
    selection.remove_at(position);
    selection
}
