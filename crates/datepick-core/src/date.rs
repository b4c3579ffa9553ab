//! `CalendarDate`: a day-granular date value with boundary parsing.
//!
//! Every date handled by the engine is normalized to the start of its day, so
//! equality and ordering are by calendar day. Parsing accepts the formats a
//! picker consumer tends to hand over: `2025-03-10`, the unpadded `2025-6-5`
//! style, and full datetimes (which are truncated to their date).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};

/// A calendar day. Ordering and equality are chronological by day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from year, month (1-12) and day (1-31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| PickerError::InvalidDate(format!("{year}-{month}-{day}")))
    }

    /// Parse date text at the engine boundary.
    ///
    /// Accepted, in order: RFC 3339 datetimes (`2025-03-10T08:00:00+02:00`),
    /// naive datetimes (`2025-03-10T08:00:00` or with a space separator), and
    /// plain dates with or without zero padding (`2025-03-10`, `2025-3-1`).
    /// Datetimes keep the calendar day as written and drop the time.
    ///
    /// # Errors
    /// Returns `PickerError::InvalidDate` for anything else, including dates that
    /// do not exist (`2025-02-30`).
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.date_naive()));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Self(ndt.date()));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| PickerError::InvalidDate(format!("'{}': {}", input, e)))
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Display label for a day cell: the day-of-month number.
    pub fn label(self) -> u32 {
        self.0.day()
    }

    /// Canonical timestamp: seconds since the Unix epoch at midnight UTC of this day.
    pub fn timestamp(self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Weekday as a number, 0 = Sunday through 6 = Saturday.
    pub fn weekday_number(self) -> u8 {
        self.0.weekday().num_days_from_sunday() as u8
    }

    pub fn is_weekend(self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether both dates fall in the same month of the same year.
    pub fn same_month(self, other: CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// The following day. Saturates at the end of the representable range.
    pub fn succ(self) -> Self {
        self.0.succ_opt().map(Self).unwrap_or(self)
    }

    /// The preceding day. Saturates at the start of the representable range.
    pub fn pred(self) -> Self {
        self.0.pred_opt().map(Self).unwrap_or(self)
    }

    /// Shift by a signed number of days, saturating at the representable range.
    pub fn add_days(self, days: i64) -> Self {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days as u64))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Self).unwrap_or(self)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    pub fn first_of_month(self) -> Self {
        self.add_days(-(self.0.day0() as i64))
    }

    pub fn last_of_month(self) -> Self {
        self.add_days((self.days_in_month() - self.day()) as i64)
    }

    pub fn is_first_of_month(self) -> bool {
        self.day() == 1
    }

    pub fn is_last_of_month(self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Shift by whole months, clamping the day to the target month's length
    /// (Jan 31 + 1 month = Feb 28/29).
    ///
    /// # Errors
    /// Returns `PickerError::InvalidYear` if the result leaves chrono's range.
    pub fn add_months(self, months: i32) -> Result<Self> {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.map(Self).ok_or_else(|| {
            PickerError::InvalidYear(self.year().saturating_add(months / 12))
        })
    }

    /// Same year and day (clamped), different month.
    pub fn with_month(self, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(PickerError::InvalidMonth(month));
        }
        let day = self.day().min(days_in_month(self.year(), month));
        Self::from_ymd(self.year(), month, day)
    }

    /// Same month and day (clamped), different year.
    pub fn with_year(self, year: i32) -> Result<Self> {
        let day = self.day().min(days_in_month(year, self.month()));
        NaiveDate::from_ymd_opt(year, self.month(), day)
            .map(Self)
            .ok_or(PickerError::InvalidYear(year))
    }

    /// Iterate every day from `self` to `end`, both inclusive. Empty if `end < self`.
    pub fn days_through(self, end: CalendarDate) -> impl Iterator<Item = CalendarDate> {
        self.0
            .iter_days()
            .take_while(move |d| *d <= end.0)
            .map(CalendarDate)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    days_in_month(year, 2) == 29
}

/// Number of days in `month` (1-12) of `year` in the proleptic Gregorian calendar.
///
/// Measured as the distance from the 1st to the 1st of the following month.
/// Returns 0 when `month` is not 1-12 or `year` is outside chrono's range.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    match first.checked_add_months(Months::new(1)) {
        Some(next) => u32::try_from(next.signed_duration_since(first).num_days()).unwrap_or(0),
        // December of chrono's last representable year.
        None => 31,
    }
}

/// Convert a weekday number (0 = Sunday .. 6 = Saturday) into a `chrono::Weekday`.
pub fn weekday_from_number(n: u8) -> Result<Weekday> {
    match n {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(PickerError::InvalidWeekday(other)),
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = PickerError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<CalendarDate> for String {
    fn from(d: CalendarDate) -> Self {
        d.to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn parses_padded_and_unpadded_dates() {
        assert_eq!(d("2025-06-05"), d("2025-6-5"));
        assert_eq!(d("2025-6-05").to_string(), "2025-06-05");
    }

    #[test]
    fn datetimes_truncate_to_their_day() {
        assert_eq!(d("2025-03-10T23:59:59"), d("2025-03-10"));
        assert_eq!(d("2025-03-10T08:00:00+02:00"), d("2025-03-10"));
        assert_eq!(d("2025-03-10 12:30:00"), d("2025-03-10"));
    }

    #[test]
    fn rejects_nonexistent_and_garbage_dates() {
        assert!(matches!(
            CalendarDate::parse("2025-02-30"),
            Err(PickerError::InvalidDate(_))
        ));
        assert!(CalendarDate::parse("tomorrow").is_err());
        assert!(CalendarDate::parse("").is_err());
    }

    #[test]
    fn month_lengths_follow_leap_rules() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2025, 13), 0);
        assert_eq!(days_in_month(NaiveDate::MAX.year(), 12), 31);
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn add_months_clamps_day() {
        assert_eq!(d("2025-01-31").add_months(1).unwrap(), d("2025-02-28"));
        assert_eq!(d("2024-01-31").add_months(1).unwrap(), d("2024-02-29"));
        assert_eq!(d("2025-01-15").add_months(-1).unwrap(), d("2024-12-15"));
    }

    #[test]
    fn with_month_and_year_clamp_day() {
        assert_eq!(d("2025-03-31").with_month(4).unwrap(), d("2025-04-30"));
        assert_eq!(d("2024-02-29").with_year(2025).unwrap(), d("2025-02-28"));
        assert!(matches!(
            d("2025-03-31").with_month(13),
            Err(PickerError::InvalidMonth(13))
        ));
    }

    #[test]
    fn timestamp_is_midnight_utc() {
        assert_eq!(d("1970-01-02").timestamp(), 86_400);
        assert_eq!(d("2025-03-10").label(), 10);
    }

    #[test]
    fn days_through_is_inclusive_and_empty_when_reversed() {
        let days: Vec<_> = d("2025-02-27").days_through(d("2025-03-02")).collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[2], d("2025-03-01"));
        assert_eq!(d("2025-03-02").days_through(d("2025-03-01")).count(), 0);
    }

    #[test]
    fn serde_uses_iso_text() {
        let json = serde_json::to_string(&d("2025-3-5")).unwrap();
        assert_eq!(json, "\"2025-03-05\"");
        let back: CalendarDate = serde_json::from_str("\"2025-3-5\"").unwrap();
        assert_eq!(back, d("2025-03-05"));
        assert!(serde_json::from_str::<CalendarDate>("\"nope\"").is_err());
    }
}
