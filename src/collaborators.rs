//! External services the booking flow depends on, resolved once at startup.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::notify::{EmailChannel, EmailJsSender};
use crate::receipt::{DocumentGenerator, PdfGenerator};

/// Email and document collaborators.
///
/// An unconfigured collaborator is recorded as absent here and surfaces as
/// [`AppError::Unavailable`] when a flow asks for it.
#[derive(Clone)]
pub struct Collaborators {
    email: Option<EmailChannel>,
    documents: Option<Arc<dyn DocumentGenerator>>,
}

impl Collaborators {
    pub fn new(email: Option<EmailChannel>, documents: Option<Arc<dyn DocumentGenerator>>) -> Self {
        Self { email, documents }
    }

    /// Build the production collaborators from configuration
    pub fn from_config(config: &Config) -> Self {
        let email = match &config.email {
            Some(email_config) => {
                info!("EmailJS configured for service {}", email_config.service_id);
                Some(EmailChannel {
                    sender: Arc::new(EmailJsSender::new(email_config)),
                    service_id: email_config.service_id.clone(),
                    admin_template_id: email_config.admin_template_id.clone(),
                    client_template_id: email_config.client_template_id.clone(),
                })
            }
            None => {
                warn!("EmailJS is not configured; booking submission is disabled");
                None
            }
        };

        Self {
            email,
            documents: Some(Arc::new(PdfGenerator)),
        }
    }

    pub fn email(&self) -> Result<&EmailChannel> {
        self.email
            .as_ref()
            .ok_or(AppError::Unavailable { collaborator: "Email" })
    }

    pub fn documents(&self) -> Result<&dyn DocumentGenerator> {
        self.documents
            .as_deref()
            .ok_or(AppError::Unavailable { collaborator: "Document" })
    }
}
