//! Request DTOs for cart endpoints.

use serde::Deserialize;

/// Request to add a service to the cart
#[derive(Debug, Deserialize)]
pub struct AddServiceRequest {
    pub name: String,
}
