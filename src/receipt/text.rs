//! Plain-text receipt shown in the preview modal.

use crate::booking::BookingRecord;

/// Render a record line by line. Pure: the same record always gives the
/// same lines.
pub fn render_text_receipt(record: &BookingRecord) -> Vec<String> {
    let mut lines = vec![
        format!("Booking reference: {}", record.reference),
        format!("Name: {}", record.name),
        format!("Email: {}", record.email),
        format!("Phone: {}", record.phone),
        format!("Region/City: {} / {}", record.region, record.city),
        format!("Date: {}  Time: {}", record.date, record.time),
        String::new(),
        "Services:".to_string(),
    ];
    lines.extend(record.services.iter().map(|s| format!("  \u{2022} {}", s)));
    lines.push(String::new());
    lines.push(format!("Total: {}", record.total));
    lines
}
