//! EmailJS REST client.
//!
//! API reference: https://www.emailjs.com/docs/rest-api/send/

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::{EmailError, EmailSender, TemplateParams};
use crate::config::EmailConfig;

/// Sends template emails through the EmailJS HTTP API
pub struct EmailJsSender {
    client: Client,
    base_url: String,
    public_key: String,
    private_key: Option<String>,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

impl EmailJsSender {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            public_key: config.public_key.clone(),
            private_key: config.private_key.clone(),
        }
    }
}

#[async_trait]
impl EmailSender for EmailJsSender {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<(), EmailError> {
        let url = format!("{}/api/v1.0/email/send", self.base_url);

        let request = SendRequest {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
            access_token: self.private_key.as_deref(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailError::Transport(format!("EmailJS request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = if body.trim().is_empty() {
                format!("EmailJS returned {}", status)
            } else {
                body
            };
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                reason,
            });
        }

        tracing::debug!("EmailJS accepted template {}", template_id);
        Ok(())
    }
}
