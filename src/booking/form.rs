//! Booking form validation.
//!
//! Runs before any pricing or email work; a rejected form never reaches the
//! engine.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::record::BookingFields;
use crate::error::{AppError, Result};

pub const DEFAULT_NOTES: &str = "No additional notes";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A form that passed validation. All required fields are present and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub region: String,
    pub city: String,
    pub date: NaiveDate,
    /// The date as the client typed it
    pub date_input: String,
    pub time: String,
    pub notes: String,
}

impl ValidatedBooking {
    /// Back to plain fields for record assembly
    pub fn fields(&self) -> BookingFields {
        BookingFields {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            region: Some(self.region.clone()),
            city: Some(self.city.clone()),
            date: Some(self.date_input.clone()),
            time: Some(self.time.clone()),
            notes: Some(self.notes.clone()),
        }
    }
}

fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// `local@domain.tld` shape check; no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl BookingFields {
    /// Validate for submission against the studio's current date.
    ///
    /// `has_services` is whether the cart holds at least one service.
    pub fn validate(&self, has_services: bool, today: NaiveDate) -> Result<ValidatedBooking> {
        if !has_services {
            return Err(AppError::Validation(
                "Please select at least one service before checking out.".to_string(),
            ));
        }

        let (Some(name), Some(email), Some(phone), Some(region), Some(city), Some(date_input), Some(time)) = (
            required(&self.name),
            required(&self.email),
            required(&self.phone),
            required(&self.region),
            required(&self.city),
            required(&self.date),
            required(&self.time),
        ) else {
            return Err(AppError::Validation(
                "Please fill in all required fields before submitting.".to_string(),
            ));
        };

        if !is_valid_email(&email) {
            return Err(AppError::Validation(
                "Please enter a valid email address.".to_string(),
            ));
        }

        let date = NaiveDate::parse_from_str(&date_input, DATE_FORMAT).map_err(|_| {
            AppError::Validation("Please enter the date as YYYY-MM-DD.".to_string())
        })?;
        if date < today {
            return Err(AppError::Validation(
                "Please select today's date or a future date.".to_string(),
            ));
        }

        Ok(ValidatedBooking {
            name,
            email,
            phone,
            region,
            city,
            date,
            date_input,
            time,
            notes: required(&self.notes).unwrap_or_else(|| DEFAULT_NOTES.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn complete() -> BookingFields {
        BookingFields {
            name: Some("Ama Owusu".to_string()),
            email: Some("ama@example.com".to_string()),
            phone: Some("0241234567".to_string()),
            region: Some("Greater Accra".to_string()),
            city: Some("Accra".to_string()),
            date: Some("2026-10-19".to_string()),
            time: Some("14:30".to_string()),
            notes: None,
        }
    }

    fn message(result: Result<ValidatedBooking>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_valid_form() {
        let booking = complete().validate(true, today()).unwrap();
        assert_eq!(booking.name, "Ama Owusu");
        assert_eq!(booking.date, today());
        assert_eq!(booking.notes, DEFAULT_NOTES);
    }

    #[test]
    fn test_empty_cart_rejected_first() {
        let msg = message(BookingFields::default().validate(false, today()));
        assert!(msg.contains("select at least one service"));
    }

    #[test]
    fn test_missing_field() {
        let mut fields = complete();
        fields.city = Some("   ".to_string());
        let msg = message(fields.validate(true, today()));
        assert!(msg.contains("fill in all required fields"));
    }

    #[test]
    fn test_invalid_email() {
        let mut fields = complete();
        fields.email = Some("ama@example".to_string());
        let msg = message(fields.validate(true, today()));
        assert!(msg.contains("valid email"));
    }

    #[test]
    fn test_past_date_rejected() {
        let mut fields = complete();
        fields.date = Some("2026-10-18".to_string());
        let msg = message(fields.validate(true, today()));
        assert!(msg.contains("today's date or a future date"));
    }

    #[test]
    fn test_unparseable_date() {
        let mut fields = complete();
        fields.date = Some("19/10/2026".to_string());
        let msg = message(fields.validate(true, today()));
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_notes_kept_when_present() {
        let mut fields = complete();
        fields.notes = Some("  First piercing, a bit nervous ".to_string());
        let booking = fields.validate(true, today()).unwrap();
        assert_eq!(booking.notes, "First piercing, a bit nervous");
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email("plainaddress"));
        assert!(is_valid_email("a@b..c"));
        assert!(!is_valid_email("a@b.c "));
        assert!(!is_valid_email(""));
    }
}
