//! Template variables for the studio and client emails.

use chrono::NaiveDate;

use super::TemplateParams;
use crate::booking::BookingRecord;
use crate::config::BusinessConfig;

/// Long-form date used in client-facing copy, e.g. `Monday, November 2, 2026`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn params<const N: usize>(pairs: [(&str, String); N]) -> TemplateParams {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Full booking and contact details for the studio inbox
pub fn admin_params(record: &BookingRecord, business: &BusinessConfig) -> TemplateParams {
    params([
        ("to_email", business.admin_email.clone()),
        ("from_name", record.name.clone()),
        ("reply_to", record.email.clone()),
        ("phone", record.phone.clone()),
        ("region", record.region.clone()),
        ("city", record.city.clone()),
        ("service", record.services.join("\n")),
        ("preferred_date", record.date.clone()),
        ("preferred_time", record.time.clone()),
        ("message", record.notes.clone()),
        ("total_amount", record.total.clone()),
        ("deposit_amount", record.deposit.clone()),
        ("reference_number", record.reference.clone()),
    ])
}

/// Confirmation for the client's own inbox
pub fn client_params(
    record: &BookingRecord,
    appointment_date: NaiveDate,
    business: &BusinessConfig,
) -> TemplateParams {
    params([
        ("to_email", record.email.clone()),
        ("client_name", record.name.clone()),
        ("client_email", record.email.clone()),
        ("business_name", business.business_name.clone()),
        ("appointment_date", long_date(appointment_date)),
        ("appointment_time", record.time.clone()),
        ("selected_services", record.services.join("\n")),
        ("total_cost", record.total.clone()),
        ("deposit_required", record.deposit.clone()),
        ("remaining_balance", record.balance.clone()),
        ("booking_reference", record.reference.clone()),
        ("business_email", business.business_email.clone()),
        ("business_phone", business.business_phone.clone()),
        ("payment_instructions", business.payment_instructions.clone()),
    ])
}
