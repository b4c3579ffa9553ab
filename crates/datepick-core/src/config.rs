//! Picker configuration, as written by consumers in JSON.
//!
//! Keys follow the provider props of the JavaScript picker (`type`,
//! `initialMonth`, `normalizeHeight`, `disabledDates`, ...). Unknown keys are
//! rejected so typos surface instead of being silently ignored.

use serde::Deserialize;

use crate::date::{weekday_from_number, CalendarDate};
use crate::disable::DisablementRule;
use crate::error::{PickerError, Result};
use crate::locale::Gregorian;
use crate::selection::{SelectionEngine, SelectionMode};
use crate::session::PickerSession;
use crate::view::{
    MonthView, DEFAULT_YEAR_RANGE_END_OFFSET, DEFAULT_YEAR_RANGE_START_OFFSET,
    MAX_YEAR_RANGE_OFFSET,
};

/// Configuration for one picker session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Selection mode.
    #[serde(default, rename = "type")]
    pub mode: SelectionMode,

    /// Month shown first. Defaults to today.
    #[serde(default)]
    pub initial_month: Option<CalendarDate>,

    /// Pad every grid to six weeks.
    #[serde(default)]
    pub normalize_height: bool,

    /// Number of consecutive months shown.
    #[serde(default = "default_calendars")]
    pub calendars: usize,

    /// Lock month/year navigation.
    #[serde(default)]
    pub disable_period_change: bool,

    /// First weekday of each grid row, 0 = Sunday.
    #[serde(default)]
    pub week_start: u8,

    #[serde(default)]
    pub disabled_dates: DisablementRule,

    #[serde(default = "default_year_range_start_offset")]
    pub year_range_start_offset: i32,

    #[serde(default = "default_year_range_end_offset")]
    pub year_range_end_offset: i32,
}

fn default_calendars() -> usize {
    1
}
fn default_year_range_start_offset() -> i32 {
    DEFAULT_YEAR_RANGE_START_OFFSET
}
fn default_year_range_end_offset() -> i32 {
    DEFAULT_YEAR_RANGE_END_OFFSET
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::default(),
            initial_month: None,
            normalize_height: false,
            calendars: default_calendars(),
            disable_period_change: false,
            week_start: 0,
            disabled_dates: DisablementRule::default(),
            year_range_start_offset: default_year_range_start_offset(),
            year_range_end_offset: default_year_range_end_offset(),
        }
    }
}

impl PickerConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    /// `Json` for malformed JSON, unknown keys, or bad dates/weekdays inside
    /// `disabledDates`; `InvalidConfig` / `InvalidWeekday` for values that
    /// parse but make no sense.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PickerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.calendars == 0 {
            return Err(PickerError::InvalidConfig(
                "calendars must be at least 1".to_string(),
            ));
        }
        let offsets = 0..=MAX_YEAR_RANGE_OFFSET;
        if !offsets.contains(&self.year_range_start_offset)
            || !offsets.contains(&self.year_range_end_offset)
        {
            return Err(PickerError::InvalidConfig(format!(
                "year range offsets must be between 0 and {}",
                MAX_YEAR_RANGE_OFFSET
            )));
        }
        weekday_from_number(self.week_start)?;
        Ok(())
    }

    /// Build a session from this configuration.
    pub fn into_session(self) -> Result<PickerSession> {
        self.validate()?;
        let locale = Gregorian::new(weekday_from_number(self.week_start)?);
        let reference = self.initial_month.unwrap_or_else(CalendarDate::today);
        let view = MonthView::new(locale, reference, self.calendars, self.normalize_height)?
            .with_period_change_disabled(self.disable_period_change);
        let engine = SelectionEngine::new(self.mode, self.disabled_dates);
        Ok(PickerSession::new(engine, view)
            .with_year_range(self.year_range_start_offset, self.year_range_end_offset))
    }
}
