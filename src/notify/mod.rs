//! Outbound booking emails.
//!
//! Two messages per booking: a full notification to the studio and a
//! confirmation to the client. The studio notification must be delivered for
//! the booking to count; the client confirmation is best-effort.

pub mod emailjs;
pub mod templates;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::error::{AppError, Result};

pub use emailjs::EmailJsSender;
pub use templates::{admin_params, client_params};

/// Template variables, name to value
pub type TemplateParams = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("{0}")]
    Transport(String),
    #[error("{reason}")]
    Rejected { status: u16, reason: String },
}

/// Transactional email provider
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> std::result::Result<(), EmailError>;
}

/// A sender plus the template ids it is used with
#[derive(Clone)]
pub struct EmailChannel {
    pub sender: Arc<dyn EmailSender>,
    pub service_id: String,
    pub admin_template_id: String,
    pub client_template_id: String,
}

/// Outcome of a booking's email pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    pub customer_notified: bool,
}

impl EmailChannel {
    /// Send the studio notification, then the client confirmation.
    ///
    /// A studio failure aborts with its diagnostic text. A client failure is
    /// logged and reported in the returned [`DeliveryReport`].
    pub async fn send_booking(
        &self,
        reference: &str,
        admin: &TemplateParams,
        client: &TemplateParams,
    ) -> Result<DeliveryReport> {
        info!("Sending admin email for booking {}", reference);
        if let Err(e) = self
            .sender
            .send(&self.service_id, &self.admin_template_id, admin)
            .await
        {
            error!("Admin email for booking {} failed: {}", reference, e);
            return Err(AppError::EmailDelivery(e.to_string()));
        }

        info!("Sending client confirmation for booking {}", reference);
        let customer_notified = match self
            .sender
            .send(&self.service_id, &self.client_template_id, client)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                warn!("Client confirmation for booking {} failed: {}", reference, e);
                false
            }
        };

        Ok(DeliveryReport { customer_notified })
    }
}
