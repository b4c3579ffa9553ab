//! Calendar locale port.
//!
//! The grid builder and the month navigator only need a handful of facts about
//! the calendar: which weekday opens a week, how long a month is, what weekday a
//! date falls on, and what to call a month. Those are behind [`CalendarLocale`]
//! so hosts with their own locale data can plug it in. [`Gregorian`] is the
//! built-in implementation with English month names.

use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};

use crate::date::{self, CalendarDate};

/// Month name length for labels and option lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthNameStyle {
    /// Three-letter abbreviation ("Mar").
    #[default]
    Short,
    /// Full name ("March").
    Long,
}

/// Calendar facts consumed by the grid builder and navigator.
pub trait CalendarLocale {
    /// First column of every week row.
    fn week_start(&self) -> Weekday;

    fn days_in_month(&self, year: i32, month: u32) -> u32;

    fn weekday_of(&self, date: CalendarDate) -> Weekday;

    /// Name of `month` (1-12).
    fn month_name(&self, month: u32, style: MonthNameStyle) -> String;

    /// Column index (0..7) of `date` in a week that starts at [`week_start`](Self::week_start).
    fn column_of(&self, date: CalendarDate) -> u32 {
        let day = self.weekday_of(date).num_days_from_sunday();
        let start = self.week_start().num_days_from_sunday();
        (day + 7 - start) % 7
    }
}

/// Proleptic Gregorian calendar with a configurable week start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gregorian {
    week_start: Weekday,
}

impl Gregorian {
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    pub fn monday_first() -> Self {
        Self::new(Weekday::Mon)
    }
}

impl Default for Gregorian {
    /// Sunday-first weeks.
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

impl CalendarLocale for Gregorian {
    fn week_start(&self) -> Weekday {
        self.week_start
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        date::days_in_month(year, month)
    }

    fn weekday_of(&self, date: CalendarDate) -> Weekday {
        date.weekday()
    }

    fn month_name(&self, month: u32, style: MonthNameStyle) -> String {
        let name = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("");
        match style {
            MonthNameStyle::Long => name.to_string(),
            MonthNameStyle::Short => name.chars().take(3).collect(),
        }
    }
}
