//! Date helpers for the browser.
//!
//! `chrono::Utc::now()` is not available on wasm32 without extra features,
//! so the current time comes from `Date.now()`.

use chrono::{DateTime, Datelike, Utc};

/// Current time from the JS clock
pub fn now_utc() -> DateTime<Utc> {
    from_millis(js_sys::Date::now())
}

fn from_millis(millis: f64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis as i64).unwrap_or_default()
}

pub fn current_year() -> i32 {
    now_utc().year()
}

/// Human form used on the order confirmation.
/// Example: 2026-10-16T09:05:00Z -> "16 Oct 2026, 09:05"
pub fn format_placed_at(dt: &DateTime<Utc>) -> String {
    dt.format("%-d %b %Y, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_placed_at() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 6, 9, 5, 0).unwrap();
        assert_eq!(format_placed_at(&dt), "6 Oct 2026, 09:05");
    }

    #[test]
    fn test_from_millis() {
        let dt = from_millis(1_000.0);
        assert_eq!(dt.timestamp(), 1);
        assert_eq!(from_millis(f64::NAN).timestamp(), 0);
    }
}
