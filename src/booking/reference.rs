//! Human-facing booking references.
//!
//! A reference is the business prefix followed by the trailing six digits of
//! the millisecond timestamp, e.g. `SP-123456`. Two bookings made exactly
//! 1,000 seconds apart (or in the same millisecond) share a reference.
//! References are advisory only and never used as a key anywhere.

use crate::clock::Clock;

const REFERENCE_MODULUS: i64 = 1_000_000;

/// Generate a booking reference from the clock's current instant
pub fn generate_reference(clock: &dyn Clock, prefix: &str) -> String {
    let millis = clock.now().timestamp_millis();
    format!("{}{:06}", prefix, millis.rem_euclid(REFERENCE_MODULUS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{DateTime, Utc};

    fn clock_at(millis: i64) -> FixedClock {
        FixedClock(DateTime::<Utc>::from_timestamp_millis(millis).unwrap())
    }

    #[test]
    fn test_reference_uses_trailing_six_digits() {
        let reference = generate_reference(&clock_at(1_760_000_123_456), "SP-");
        assert_eq!(reference, "SP-123456");
    }

    #[test]
    fn test_reference_is_fixed_width() {
        let reference = generate_reference(&clock_at(1_760_000_000_042), "SP-");
        assert_eq!(reference, "SP-000042");
    }

    #[test]
    fn test_reference_is_deterministic_for_fixed_clock() {
        let clock = clock_at(1_760_000_987_654);
        assert_eq!(
            generate_reference(&clock, "SP-"),
            generate_reference(&clock, "SP-")
        );
    }

    #[test]
    fn test_known_collision_every_thousand_seconds() {
        let a = generate_reference(&clock_at(1_760_000_123_456), "SP-");
        let b = generate_reference(&clock_at(1_760_001_123_456), "SP-");
        assert_eq!(a, b);
    }
}
