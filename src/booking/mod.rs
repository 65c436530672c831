//! Booking records, form validation and the booking flows.

pub mod form;
pub mod record;
pub mod reference;
pub mod services;

pub use form::{is_valid_email, ValidatedBooking, DEFAULT_NOTES};
pub use record::{build_receipt_payload, BookingFields, BookingRecord};
pub use reference::generate_reference;
pub use services::{
    preview_booking, receipt_document, stored_receipt, submit_booking, BookingConfirmation,
    PaymentInstructions,
};
