//! Booking snapshot shared by the receipt preview, the PDF and the emails.

use serde::{Deserialize, Serialize};

use crate::pricing::{format_money, LineKind, Quote};

/// Contact fields as received from the booking form. Anything may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

/// Immutable booking snapshot.
///
/// Plain strings and string lists only, so it survives a trip through the
/// session's text store unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingRecord {
    pub reference: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub region: String,
    pub city: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    /// One entry per quote line, e.g. `Lobe (GHS 75.00)`
    pub services: Vec<String>,
    /// Selected service names only, without prices or the fee
    pub service_names: Vec<String>,
    pub total: String,
    pub deposit: String,
    pub balance: String,
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// Assemble a booking record. Missing contact fields become empty strings;
/// date and time pass through untouched.
pub fn build_receipt_payload(fields: &BookingFields, quote: &Quote, reference: &str) -> BookingRecord {
    BookingRecord {
        reference: reference.to_string(),
        name: trimmed(&fields.name),
        email: trimmed(&fields.email),
        phone: trimmed(&fields.phone),
        region: trimmed(&fields.region),
        city: trimmed(&fields.city),
        date: fields.date.clone().unwrap_or_default(),
        time: fields.time.clone().unwrap_or_default(),
        notes: trimmed(&fields.notes),
        services: quote
            .line_items
            .iter()
            .map(|line| format!("{} ({})", line.name, format_money(line.price, &quote.currency)))
            .collect(),
        service_names: quote
            .line_items
            .iter()
            .filter(|line| line.kind == LineKind::Service)
            .map(|line| line.name.clone())
            .collect(),
        total: format_money(quote.total, &quote.currency),
        deposit: format_money(quote.deposit, &quote.currency),
        balance: format_money(quote.remaining_balance(), &quote.currency),
    }
}

impl BookingRecord {
    /// Serialize for the session's single receipt slot
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
