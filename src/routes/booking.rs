//! Booking preview, receipt and submission handlers

use askama::Template;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use tracing::info;

use super::SessionId;
use crate::booking::{
    preview_booking, receipt_document, stored_receipt, submit_booking, BookingConfirmation,
    BookingFields, BookingRecord,
};
use crate::error::Result;
use crate::receipt::render_text_receipt;
use crate::AppState;

/// Receipt page template
#[derive(Template)]
#[template(path = "booking/receipt.html")]
struct ReceiptTemplate {
    business_name: String,
    business_email: String,
    business_phone: String,
    reference: String,
    lines: Vec<String>,
    deposit: String,
    balance: String,
    momo_number: String,
    momo_name: String,
}

/// Preview response: the stored record and its text rendering
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub receipt: BookingRecord,
    pub lines: Vec<String>,
}

pub async fn preview(
    State(state): State<AppState>,
    SessionId(session): SessionId,
    Json(fields): Json<BookingFields>,
) -> Result<Json<PreviewResponse>> {
    let record = preview_booking(&state, &session, &fields).await?;
    let lines = render_text_receipt(&record);
    Ok(Json(PreviewResponse {
        receipt: record,
        lines,
    }))
}

/// Stored receipt as a printable HTML page
pub async fn receipt_page(
    State(state): State<AppState>,
    SessionId(session): SessionId,
) -> Result<Html<String>> {
    let record = stored_receipt(&state, &session).await?;
    let business = state.engine.business();

    let template = ReceiptTemplate {
        business_name: business.business_name.clone(),
        business_email: business.business_email.clone(),
        business_phone: business.business_phone.clone(),
        reference: record.reference.clone(),
        lines: render_text_receipt(&record),
        deposit: record.deposit.clone(),
        balance: record.balance.clone(),
        momo_number: business.momo_number.clone(),
        momo_name: business.momo_name.clone(),
    };

    Ok(Html(template.render()?))
}

/// Stored receipt as a PDF download
pub async fn receipt_pdf(
    State(state): State<AppState>,
    SessionId(session): SessionId,
) -> Result<impl IntoResponse> {
    let record = stored_receipt(&state, &session).await?;
    let bytes = receipt_document(&state, &record)?;
    info!(
        "Session {} downloaded receipt {} ({} bytes)",
        session,
        record.reference,
        bytes.len()
    );

    let disposition = format!(
        "attachment; filename=\"SLAY-Booking-Receipt-{}.pdf\"",
        record.reference
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

pub async fn submit(
    State(state): State<AppState>,
    SessionId(session): SessionId,
    Json(fields): Json<BookingFields>,
) -> Result<Json<BookingConfirmation>> {
    Ok(Json(submit_booking(&state, &session, &fields).await?))
}
