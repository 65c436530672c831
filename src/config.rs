//! Application configuration loaded from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use rust_decimal::Decimal;

use crate::error::{AppError, Result};
use crate::pricing::{Catalog, MandatoryFee};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub static_dir: PathBuf,
    pub session_ttl: Duration,
    pub email: Option<EmailConfig>,
    pub business: BusinessConfig,
}

/// EmailJS credentials and template ids
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub base_url: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub service_id: String,
    pub admin_template_id: String,
    pub client_template_id: String,
}

/// Studio facts injected into the pricing engine and receipt renderers
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub business_name: String,
    pub business_email: String,
    pub business_phone: String,
    pub admin_email: String,
    pub currency: String,
    pub deposit_rate: Decimal,
    pub reference_prefix: String,
    pub momo_number: String,
    pub momo_name: String,
    pub payment_instructions: String,
    pub fee: MandatoryFee,
    pub catalog: Catalog,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            business_name: "SLAY BodyPiercing".to_string(),
            business_email: "info@slaybodypiercing.com".to_string(),
            business_phone: "+233 24 123 4567".to_string(),
            admin_email: "bookings@slaybodypiercing.com".to_string(),
            currency: "GHS".to_string(),
            deposit_rate: Decimal::new(5, 1),
            reference_prefix: "SP-".to_string(),
            momo_number: "0550396789".to_string(),
            momo_name: "Juliet Sena Dogbe".to_string(),
            payment_instructions: "Make payment via Mobile Money to complete your booking"
                .to_string(),
            fee: MandatoryFee::default(),
            catalog: Catalog::studio_default(),
        }
    }
}

const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com";
const DEFAULT_SESSION_TTL_SECS: u64 = 4 * 60 * 60;

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let bind_address = env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid BIND_ADDRESS".to_string()))?;

        let session_ttl = env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_SECS.to_string())
            .parse()
            .map(Duration::from_secs)
            .map_err(|_| AppError::Configuration("Invalid SESSION_TTL_SECS".to_string()))?;

        let mut business = BusinessConfig::default();
        if let Ok(admin_email) = env::var("ADMIN_EMAIL") {
            business.admin_email = admin_email;
        }
        if let Ok(path) = env::var("CATALOG_PATH") {
            business.catalog = load_catalog(&path)?;
        }

        Ok(Config {
            bind_address,
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string())
                .into(),
            session_ttl,
            email: EmailConfig::from_env(),
            business,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.session_ttl.is_zero() {
            return Err(AppError::Configuration(
                "Session TTL must be greater than 0".to_string(),
            ));
        }

        self.business.validate()
    }
}

impl BusinessConfig {
    /// Check catalog integrity and pricing policy values
    pub fn validate(&self) -> Result<()> {
        let mut problems = self.catalog.problems();

        if self.catalog.is_empty() {
            problems.push("catalog is empty".to_string());
        }
        if self.fee.amount < Decimal::ZERO {
            problems.push("mandatory fee must not be negative".to_string());
        }
        if self.deposit_rate <= Decimal::ZERO || self.deposit_rate > Decimal::ONE {
            problems.push(format!(
                "deposit rate {} must be in (0, 1]",
                self.deposit_rate
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::Configuration(problems.join("; ")))
        }
    }
}

impl EmailConfig {
    /// Read EmailJS settings. Returns `None` when any required key is missing,
    /// which leaves the email collaborator unavailable.
    pub fn from_env() -> Option<Self> {
        let required = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());

        Some(Self {
            base_url: env::var("EMAILJS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_EMAILJS_BASE_URL.to_string()),
            public_key: required("EMAILJS_PUBLIC_KEY")?,
            private_key: required("EMAILJS_PRIVATE_KEY"),
            service_id: required("EMAILJS_SERVICE_ID")?,
            admin_template_id: required("EMAILJS_ADMIN_TEMPLATE_ID")?,
            client_template_id: required("EMAILJS_CLIENT_TEMPLATE_ID")?,
        })
    }
}

fn load_catalog(path: &str) -> Result<Catalog> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Configuration(format!("Cannot read CATALOG_PATH {}: {}", path, e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Configuration(format!("Invalid catalog in {}: {}", path, e)))
}
