//! Booking flows: preview, stored receipt retrieval and submission.

use serde::Serialize;
use tracing::{info, warn};

use super::form::ValidatedBooking;
use super::record::{build_receipt_payload, BookingFields, BookingRecord};
use super::reference::generate_reference;
use crate::config::BusinessConfig;
use crate::error::{AppError, Result};
use crate::notify::{admin_params, client_params, templates::long_date};
use crate::receipt::render_document;
use crate::AppState;

/// Mobile-money deposit details shown after a booking
#[derive(Debug, Clone, Serialize)]
pub struct PaymentInstructions {
    pub method: String,
    pub number: String,
    pub name: String,
    pub amount: String,
    pub reference: String,
}

/// Result of a successful submission
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub reference: String,
    pub client_name: String,
    pub booking_date: String,
    pub booking_time: String,
    pub services: String,
    pub total: String,
    pub deposit: String,
    pub remaining_balance: String,
    pub customer_notified: bool,
    pub payment: PaymentInstructions,
}

impl BookingConfirmation {
    fn new(
        record: &BookingRecord,
        booking: &ValidatedBooking,
        business: &BusinessConfig,
        customer_notified: bool,
    ) -> Self {
        Self {
            reference: record.reference.clone(),
            client_name: record.name.clone(),
            booking_date: long_date(booking.date),
            booking_time: record.time.clone(),
            services: record.service_names.join(", "),
            total: record.total.clone(),
            deposit: record.deposit.clone(),
            remaining_balance: record.balance.clone(),
            customer_notified,
            payment: PaymentInstructions {
                method: "MTN Mobile Money".to_string(),
                number: business.momo_number.clone(),
                name: business.momo_name.clone(),
                amount: record.deposit.clone(),
                reference: record.reference.clone(),
            },
        }
    }
}

fn serialize(record: &BookingRecord) -> Result<String> {
    record
        .to_json()
        .map_err(|e| AppError::Internal(format!("Failed to serialize receipt: {}", e)))
}

/// Snapshot the session's cart and the given fields into the receipt slot.
///
/// No validation: a preview shows whatever the form currently holds.
pub async fn preview_booking(
    state: &AppState,
    session: &str,
    fields: &BookingFields,
) -> Result<BookingRecord> {
    let selection = state.sessions.selection(session).await;
    let quote = state.engine.quote(&selection);
    let reference = generate_reference(
        state.clock.as_ref(),
        &state.engine.business().reference_prefix,
    );

    let record = build_receipt_payload(fields, &quote, &reference);
    state.sessions.store_receipt(session, serialize(&record)?).await;

    info!(
        "Preview {} for session {} ({} lines, total {})",
        record.reference,
        session,
        record.services.len(),
        record.total
    );
    Ok(record)
}

/// Load the record last stored for this session
pub async fn stored_receipt(state: &AppState, session: &str) -> Result<BookingRecord> {
    let raw = state.sessions.receipt(session).await.ok_or(AppError::NoReceipt)?;
    BookingRecord::from_json(&raw).map_err(|e| {
        warn!("Discarding unreadable receipt for session {}: {}", session, e);
        AppError::NoReceipt
    })
}

/// Render a record to a downloadable document
pub fn receipt_document(state: &AppState, record: &BookingRecord) -> Result<Vec<u8>> {
    let generator = state.collaborators.documents()?;
    render_document(
        record,
        state.engine.business(),
        state.clock.now(),
        generator,
    )
    .map_err(|e| AppError::Document(e.to_string()))
}

/// Validate, price and email a booking.
///
/// Only one submission per session runs at a time. On failure the cart and
/// receipt slot are left as they were so the client can retry.
pub async fn submit_booking(
    state: &AppState,
    session: &str,
    fields: &BookingFields,
) -> Result<BookingConfirmation> {
    let _guard = state.sessions.begin_submission(session)?;

    let selection = state.sessions.selection(session).await;
    let booking = fields.validate(!selection.is_empty(), state.clock.today())?;
    let channel = state.collaborators.email()?;

    let business = state.engine.business();
    let quote = state.engine.quote(&selection);
    let reference = generate_reference(state.clock.as_ref(), &business.reference_prefix);
    let record = build_receipt_payload(&booking.fields(), &quote, &reference);

    let report = channel
        .send_booking(
            &reference,
            &admin_params(&record, business),
            &client_params(&record, booking.date, business),
        )
        .await?;

    state.sessions.clear_selection(session).await;
    state.sessions.store_receipt(session, serialize(&record)?).await;

    info!(
        "Booking {} submitted for session {} (total {}, client notified: {})",
        reference, session, record.total, report.customer_notified
    );

    Ok(BookingConfirmation::new(
        &record,
        &booking,
        business,
        report.customer_notified,
    ))
}
