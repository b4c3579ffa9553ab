//! Disablement rules: which dates a picker refuses to select.
//!
//! A [`DisablementRule`] is a set of predicates combined with OR: a date is
//! disabled as soon as any configured predicate matches. An empty rule disables
//! nothing.
//!
//! The JSON shape mirrors the provider configuration consumers already write:
//!
//! ```json
//! { "every": "weekdays", "weekdays": [1, 6], "days": ["2025-6-05"],
//!   "start": "2025-6-4", "end": "2025-6-20" }
//! ```

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::date::{weekday_from_number, CalendarDate};
use crate::error::{PickerError, Result};

/// An inclusive pair of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl DateSpan {
    /// Build a span, swapping the endpoints if given out of order.
    pub fn new(a: CalendarDate, b: CalendarDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        let span = Self::new(self.start, self.end);
        span.start <= date && date <= span.end
    }
}

/// Declarative set of date predicates (OR semantics).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleConfig", into = "RuleConfig")]
pub struct DisablementRule {
    /// Saturdays and Sundays.
    pub weekends: bool,
    /// Specific weekdays.
    pub weekdays: Vec<Weekday>,
    /// Individual days.
    pub dates: Vec<CalendarDate>,
    /// Cutoff start. Alone, every date strictly after it is disabled.
    pub start: Option<CalendarDate>,
    /// Cutoff end. Alone, every date strictly before it is disabled.
    /// Together with `start`, the inclusive span between the two is disabled.
    pub end: Option<CalendarDate>,
    /// Inclusive blocked span.
    pub between: Option<DateSpan>,
}

impl DisablementRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weekends(mut self) -> Self {
        self.weekends = true;
        self
    }

    pub fn weekday(mut self, weekday: Weekday) -> Self {
        if !self.weekdays.contains(&weekday) {
            self.weekdays.push(weekday);
        }
        self
    }

    pub fn date(mut self, date: CalendarDate) -> Self {
        self.dates.push(date);
        self
    }

    /// Disable every date strictly after `date`.
    pub fn disable_after(mut self, date: CalendarDate) -> Self {
        self.start = Some(date);
        self
    }

    /// Disable every date strictly before `date`.
    pub fn disable_before(mut self, date: CalendarDate) -> Self {
        self.end = Some(date);
        self
    }

    /// Disable the inclusive span `[a, b]` (endpoints may be given in any order).
    pub fn disable_between(mut self, a: CalendarDate, b: CalendarDate) -> Self {
        self.between = Some(DateSpan::new(a, b));
        self
    }

    /// True when no predicate is configured.
    pub fn is_empty(&self) -> bool {
        !self.weekends
            && self.weekdays.is_empty()
            && self.dates.is_empty()
            && self.start.is_none()
            && self.end.is_none()
            && self.between.is_none()
    }

    /// Whether any configured predicate matches `date`.
    pub fn matches(&self, date: CalendarDate) -> bool {
        if self.weekends && date.is_weekend() {
            return true;
        }
        if self.weekdays.contains(&date.weekday()) {
            return true;
        }
        if self.dates.contains(&date) {
            return true;
        }
        let cutoff = match (self.start, self.end) {
            (Some(start), Some(end)) => DateSpan::new(start, end).contains(date),
            (Some(start), None) => date > start,
            (None, Some(end)) => date < end,
            (None, None) => false,
        };
        if cutoff {
            return true;
        }
        self.between.is_some_and(|span| span.contains(date))
    }
}

/// Whether `date` is disabled under `rules`.
pub fn is_disabled(date: CalendarDate, rules: &DisablementRule) -> bool {
    rules.matches(date)
}

/// Whether any day in the inclusive interval between `start` and `end` is
/// disabled. The endpoints may be given in either order.
pub fn is_range_disabled(start: CalendarDate, end: CalendarDate, rules: &DisablementRule) -> bool {
    if rules.is_empty() {
        return false;
    }
    let span = DateSpan::new(start, end);
    span.start
        .days_through(span.end)
        .any(|day| rules.matches(day))
}

/// Recurring-day selector of the JSON configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Every {
    #[serde(alias = "weekends")]
    Weekend,
    Weekdays,
}

/// Wire shape of a [`DisablementRule`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    every: Option<Every>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    weekdays: Vec<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    days: Vec<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    between: Option<DateSpan>,
}

impl TryFrom<RuleConfig> for DisablementRule {
    type Error = PickerError;

    fn try_from(raw: RuleConfig) -> Result<Self> {
        let weekdays = raw
            .weekdays
            .iter()
            .map(|&n| weekday_from_number(n))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            weekends: raw.every == Some(Every::Weekend),
            weekdays,
            dates: raw.days,
            start: raw.start,
            end: raw.end,
            between: raw.between.map(|s| DateSpan::new(s.start, s.end)),
        })
    }
}

impl From<DisablementRule> for RuleConfig {
    fn from(rule: DisablementRule) -> Self {
        let every = if rule.weekends {
            Some(Every::Weekend)
        } else if !rule.weekdays.is_empty() {
            Some(Every::Weekdays)
        } else {
            None
        };
        Self {
            every,
            weekdays: rule
                .weekdays
                .iter()
                .map(|w| w.num_days_from_sunday() as u8)
                .collect(),
            days: rule.dates,
            start: rule.start,
            end: rule.end,
            between: rule.between,
        }
    }
}
