//! Rolling calendar window.
//!
//! Event dates are stored as bare `YYYY-MM-DD` strings. They are matched by
//! comparing their parsed year/month/day fields with local calendar days and
//! are never turned into an instant: interpreting `"2023-10-25"` as UTC midnight
//! and converting to a local zone west of UTC lands on October 24.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use serde::Serialize;

use barmaster_planning::EventPlan;

/// Year/month/day fields of a stored date string.
///
/// No range validation happens here: `2023-02-30` parses, it simply never
/// equals a real calendar day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Parse exactly three dash-separated integer fields.
    ///
    /// Returns `None` for anything else (empty input, extra or missing fields,
    /// non-numeric fields, a time suffix).
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split('-');
        let year = parts.next()?.trim().parse::<i32>().ok()?;
        let month = parts.next()?.trim().parse::<u32>().ok()?;
        let day = parts.next()?.trim().parse::<u32>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn matches(&self, day: NaiveDate) -> bool {
        day.year() == self.year && day.month() == self.month && day.day() == self.day
    }
}

/// Whether a stored date string names the given local calendar day.
///
/// Malformed strings never match.
pub fn is_same_day(raw: &str, day: NaiveDate) -> bool {
    CalendarDate::parse(raw).is_some_and(|d| d.matches(day))
}

/// `DD/MM/YYYY` rendering of a stored date, built from its parsed fields.
pub fn format_date_br(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return "--/--/----".to_string();
    };
    match CalendarDate::parse(raw) {
        Some(d) => format!("{:02}/{:02}/{:04}", d.day, d.month, d.year),
        None => raw.to_string(),
    }
}

/// `len` consecutive local calendar days, day 0 being "today".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarWindow {
    days: Vec<NaiveDate>,
}

impl CalendarWindow {
    pub fn starting(today: NaiveDate, len: usize) -> Self {
        Self {
            days: today.iter_days().take(len).collect(),
        }
    }

    /// Window anchored on the calendar day `now` falls on in its own zone.
    pub fn from_instant<Tz: TimeZone>(now: &DateTime<Tz>, len: usize) -> Self {
        Self::starting(now.date_naive(), len)
    }

    /// Window anchored on today in the host's local zone.
    pub fn local(len: usize) -> Self {
        Self::from_instant(&Local::now(), len)
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    /// Offset of the day a stored date string names, if it is inside the window.
    pub fn position(&self, raw: &str) -> Option<usize> {
        let date = CalendarDate::parse(raw)?;
        self.days.iter().position(|d| date.matches(*d))
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.position(raw).is_some()
    }

    /// Events dated inside the window, in input order. Undated events are skipped.
    pub fn events_within<'a>(&self, events: &'a [EventPlan]) -> Vec<&'a EventPlan> {
        events
            .iter()
            .filter(|e| e.date.as_deref().is_some_and(|d| self.contains(d)))
            .collect()
    }

    /// Events dated on one specific day, in input order.
    pub fn events_on<'a>(day: NaiveDate, events: &'a [EventPlan]) -> Vec<&'a EventPlan> {
        events
            .iter()
            .filter(|e| e.date.as_deref().is_some_and(|d| is_same_day(d, day)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_three_integer_fields_only() {
        assert_eq!(
            CalendarDate::parse("2023-10-25"),
            Some(CalendarDate {
                year: 2023,
                month: 10,
                day: 25
            })
        );
        assert_eq!(CalendarDate::parse(""), None);
        assert_eq!(CalendarDate::parse("2023-10"), None);
        assert_eq!(CalendarDate::parse("2023-10-25-01"), None);
        assert_eq!(CalendarDate::parse("2023-10-25T10:00"), None);
        assert_eq!(CalendarDate::parse("25/10/2023"), None);
        assert_eq!(CalendarDate::parse("abc-de-fg"), None);
    }

    #[test]
    fn malformed_dates_never_match() {
        let day = ymd(2023, 10, 25);
        assert!(!is_same_day("not a date", day));
        assert!(!is_same_day("2023-10", day));
        assert!(!is_same_day("2023-02-30", ymd(2023, 3, 2)));
        assert!(is_same_day("2023-10-25", day));
        assert!(is_same_day("2023-1-5", ymd(2023, 1, 5)));
    }

    #[test]
    fn matches_local_day_west_of_utc_late_evening() {
        // 23:30 on Oct 25 in UTC-3 is already Oct 26 in UTC.
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2023, 10, 25, 23, 30, 0).unwrap();
        assert_eq!(now.with_timezone(&Utc).date_naive(), ymd(2023, 10, 26));

        let window = CalendarWindow::from_instant(&now, 7);
        assert_eq!(window.first_day(), Some(ymd(2023, 10, 25)));
        assert_eq!(window.position("2023-10-25"), Some(0));
    }

    #[test]
    fn matches_local_day_east_of_utc_just_after_midnight() {
        // 00:30 on Oct 25 in UTC+9 is still Oct 24 in UTC.
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2023, 10, 25, 0, 30, 0).unwrap();
        assert_eq!(now.with_timezone(&Utc).date_naive(), ymd(2023, 10, 24));

        let window = CalendarWindow::from_instant(&now, 7);
        assert_eq!(window.position("2023-10-25"), Some(0));
        assert!(!window.contains("2023-10-24"));
    }

    #[test]
    fn naive_utc_parse_would_shift_the_day() {
        // The failure mode the string-field comparison avoids: treating the
        // stored date as UTC midnight and viewing it from UTC-3.
        let utc_midnight = ymd(2023, 10, 25).and_hms_opt(0, 0, 0).unwrap().and_utc();
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(utc_midnight.with_timezone(&tz).date_naive(), ymd(2023, 10, 24));

        assert!(is_same_day("2023-10-25", ymd(2023, 10, 25)));
    }

    #[test]
    fn window_crosses_month_and_year_boundaries() {
        let window = CalendarWindow::starting(ymd(2023, 12, 29), 7);
        assert_eq!(window.days().last().copied(), Some(ymd(2024, 1, 4)));
        assert_eq!(window.position("2024-01-01"), Some(3));
    }

    #[test]
    fn empty_window_contains_nothing() {
        let window = CalendarWindow::starting(ymd(2023, 10, 25), 0);
        assert!(window.is_empty());
        assert!(!window.contains("2023-10-25"));
    }

    #[test]
    fn format_date_br_uses_parsed_fields() {
        assert_eq!(format_date_br(Some("2023-10-05")), "05/10/2023");
        assert_eq!(format_date_br(Some("amanhã")), "amanhã");
        assert_eq!(format_date_br(Some("")), "--/--/----");
        assert_eq!(format_date_br(None), "--/--/----");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the window has exactly `len` days, each one day after the
        /// previous, whatever the offset of the instant it was built from.
        #[test]
        fn window_is_consecutive_in_any_offset(
            len in 0usize..60,
            offset_hours in -12i32..=14,
            minutes in 0i64..(400 * 24 * 60),
        ) {
            let tz = FixedOffset::east_opt(offset_hours * 3600).unwrap();
            let base = tz.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
            let now = base + Duration::minutes(minutes);

            let window = CalendarWindow::from_instant(&now, len);
            prop_assert_eq!(window.len(), len);
            if let Some(first) = window.first_day() {
                prop_assert_eq!(first, now.date_naive());
            }
            for pair in window.days().windows(2) {
                prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
            }

            let today = now.date_naive();
            let stored = format!("{:04}-{:02}-{:02}", today.year(), today.month(), today.day());
            prop_assert_eq!(window.contains(&stored), len > 0);
        }
    }
}
