//! # Store-Local Time
//!
//! Calendar-day arithmetic for the history filter.
//!
//! Bill timestamps are stored in UTC; "today" on the history screen is
//! a calendar day in the store's local time zone (IST). This module
//! maps an inclusive local-date range onto a half-open UTC instant
//! range suitable for an indexed `bill_date` query:
//!
//! ```text
//! [start, end]  (local calendar days, inclusive)
//!         │
//!         ▼
//! [startOfDay(start), startOfDay(end) + 1 day)   in UTC
//! ```
//!
//! IST has no daylight saving, so a fixed +05:30 offset is exact.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};

/// Seconds east of UTC for IST (+05:30).
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Returns the store's time zone (IST, +05:30).
pub fn store_tz() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).expect("IST offset is in range")
}

/// UTC instant of local midnight at the start of `date`.
fn local_midnight_utc(date: NaiveDate, tz: FixedOffset) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    (naive - Duration::seconds(tz.local_minus_utc() as i64)).and_utc()
}

/// Maps an inclusive local-date range to a half-open UTC instant range.
///
/// A bill falls within the range iff `start_utc <= bill_date < end_utc`.
/// Callers are expected to validate `start <= end` before calling;
/// an inverted range simply yields an empty window.
///
/// ## Example
/// ```rust
/// use aurum_core::time::{day_range_utc, store_tz};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
/// let (start, end) = day_range_utc(day, day, store_tz());
/// assert_eq!(end - start, chrono::Duration::days(1));
/// ```
pub fn day_range_utc(
    start: NaiveDate,
    end: NaiveDate,
    tz: FixedOffset,
) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        local_midnight_utc(start, tz),
        local_midnight_utc(end, tz) + Duration::days(1),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ist_midnight_maps_to_previous_utc_evening() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let (start, end) = day_range_utc(day, day, store_tz());

        // 2026-08-26 00:00 IST == 2026-08-25 18:30 UTC
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 8, 25, 18, 30, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 8, 26, 18, 30, 0).unwrap());
    }

    #[test]
    fn test_late_utc_evening_falls_on_next_ist_day() {
        // 2026-08-25 20:00 UTC is already 01:30 on the 26th in IST.
        let instant = Utc.with_ymd_and_hms(2026, 8, 25, 20, 0, 0).unwrap();

        let day = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let (start, end) = day_range_utc(day, day, store_tz());
        assert!(start <= instant && instant < end);

        let prev = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let (start, end) = day_range_utc(prev, prev, store_tz());
        assert!(!(start <= instant && instant < end));
    }

    #[test]
    fn test_multi_day_range() {
        let start_day = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let end_day = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let (start, end) = day_range_utc(start_day, end_day, store_tz());
        assert_eq!(end - start, Duration::days(3));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let a = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let (start, end) = day_range_utc(a, b, store_tz());
        assert!(end < start);
    }
}
