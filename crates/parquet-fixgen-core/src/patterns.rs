//! Fixture data patterns.
//!
//! One module per pattern, each exposing `schema()` and `rows()`. The
//! generators take their random source (any `rand::Rng`) and, where the
//! pattern is anchored to the present, a `now` timestamp as explicit
//! parameters; there is no ambient clock or global RNG in this crate.

use chrono::NaiveDate;

pub mod datetimes;
pub mod inventory;
pub mod users;

/// Days between `date` and the Unix epoch, as stored in a 32-bit date cell.
pub(crate) fn days_since_epoch(date: NaiveDate) -> i32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch date");
    date.signed_duration_since(epoch).num_days() as i32
}

/// Round `value` to `places` decimal digits.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_since_epoch_matches_known_dates() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(days_since_epoch(epoch), 0);

        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(days_since_epoch(base), 18262);
    }

    #[test]
    fn round_to_keeps_the_requested_precision() {
        assert_eq!(round_to(12.345_678, 2), 12.35);
        assert_eq!(round_to(4.96, 1), 5.0);
        assert_eq!(round_to(0.004, 2), 0.0);
    }
}
