//! Month navigation for one or more side-by-side calendars.
//!
//! A [`MonthView`] holds the reference month and one [`CalendarPanel`] per
//! displayed calendar; panel `i` shows the reference month plus `i` months.
//! Every navigation command produces a [`ReferenceDateChanged`] event that is
//! broadcast to all panels, and each panel rebuilds its own grid from it.

use serde::Serialize;
use tracing::debug;

use crate::date::CalendarDate;
use crate::error::{PickerError, Result};
use crate::grid::{build_month_grid_with, MonthGrid};
use crate::locale::{CalendarLocale, Gregorian, MonthNameStyle};

/// Default number of years offered after the reference year.
pub const DEFAULT_YEAR_RANGE_START_OFFSET: i32 = 10;
/// Default number of years offered before the reference year.
pub const DEFAULT_YEAR_RANGE_END_OFFSET: i32 = 40;
/// Upper bound for either year range offset.
pub const MAX_YEAR_RANGE_OFFSET: i32 = 1000;

/// Broadcast whenever the reference month changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceDateChanged {
    /// First day of the new reference month.
    pub reference: CalendarDate,
}

/// One calendar of a view, displaying the reference month shifted by `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPanel {
    offset: u32,
    grid: MonthGrid,
}

impl CalendarPanel {
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Rebuild this panel's grid for a new reference month.
    pub fn apply<L: CalendarLocale + ?Sized>(
        &mut self,
        event: &ReferenceDateChanged,
        locale: &L,
        normalize_height: bool,
    ) -> Result<()> {
        let offset = i32::try_from(self.offset).map_err(|_| {
            PickerError::InvalidConfig(format!("panel offset {} too large", self.offset))
        })?;
        let month = event.reference.add_months(offset)?;
        self.grid = build_month_grid_with(locale, month, normalize_height);
        Ok(())
    }
}

/// Reference month, panels, and navigation commands.
#[derive(Debug, Clone)]
pub struct MonthView<L = Gregorian> {
    locale: L,
    reference: CalendarDate,
    normalize_height: bool,
    period_change_disabled: bool,
    panels: Vec<CalendarPanel>,
}

impl MonthView<Gregorian> {
    /// A single Sunday-first calendar showing `reference`'s month.
    pub fn single(reference: CalendarDate) -> Self {
        Self::build(Gregorian::default(), reference, 0, false)
    }
}

impl<L: CalendarLocale> MonthView<L> {
    /// Create a view with `calendars` consecutive months starting at `reference`.
    ///
    /// # Errors
    /// `InvalidConfig` when `calendars` is zero or does not fit a month
    /// offset, `InvalidYear` when the last panel's month is out of range.
    pub fn new(
        locale: L,
        reference: CalendarDate,
        calendars: usize,
        normalize_height: bool,
    ) -> Result<Self> {
        let last_offset = last_panel_offset(calendars)?;
        reference.add_months(last_offset)?;
        Ok(Self::build(locale, reference, last_offset, normalize_height))
    }

    fn build(locale: L, reference: CalendarDate, last_offset: i32, normalize_height: bool) -> Self {
        let reference = reference.first_of_month();
        let panels = (0..=last_offset)
            .map(|offset| {
                let month = reference.add_months(offset).unwrap_or(reference);
                CalendarPanel {
                    offset: offset.unsigned_abs(),
                    grid: build_month_grid_with(&locale, month, normalize_height),
                }
            })
            .collect();
        Self {
            locale,
            reference,
            normalize_height,
            period_change_disabled: false,
            panels,
        }
    }

    /// Lock or unlock the user-facing navigation commands.
    pub fn with_period_change_disabled(mut self, disabled: bool) -> Self {
        self.period_change_disabled = disabled;
        self
    }

    pub fn locale(&self) -> &L {
        &self.locale
    }

    /// First day of the reference month (the first panel's month).
    pub fn reference(&self) -> CalendarDate {
        self.reference
    }

    /// First day of the last panel's month.
    pub fn last_month(&self) -> CalendarDate {
        self.panels
            .last()
            .map(|p| p.grid.reference())
            .unwrap_or(self.reference)
    }

    pub fn calendars(&self) -> usize {
        self.panels.len()
    }

    pub fn normalize_height(&self) -> bool {
        self.normalize_height
    }

    pub fn is_period_change_disabled(&self) -> bool {
        self.period_change_disabled
    }

    pub fn panels(&self) -> &[CalendarPanel] {
        &self.panels
    }

    pub fn grid(&self, index: usize) -> Option<&MonthGrid> {
        self.panels.get(index).map(|p| &p.grid)
    }

    pub fn grids(&self) -> impl Iterator<Item = &MonthGrid> {
        self.panels.iter().map(|p| &p.grid)
    }

    pub fn next_month(&mut self) -> Result<ReferenceDateChanged> {
        self.ensure_unlocked()?;
        let next = self.reference.add_months(1)?;
        self.set_reference_date(next)
    }

    pub fn previous_month(&mut self) -> Result<ReferenceDateChanged> {
        self.ensure_unlocked()?;
        let previous = self.reference.add_months(-1)?;
        self.set_reference_date(previous)
    }

    /// Jump to `month` (1-12) of the current reference year.
    pub fn set_month(&mut self, month: u32) -> Result<ReferenceDateChanged> {
        self.ensure_unlocked()?;
        let target = self.reference.with_month(month)?;
        self.set_reference_date(target)
    }

    /// Jump to the current reference month of `year`.
    pub fn set_year(&mut self, year: i32) -> Result<ReferenceDateChanged> {
        self.ensure_unlocked()?;
        let target = self.reference.with_year(year)?;
        self.set_reference_date(target)
    }

    /// Move the reference month to `date`'s month and rebuild every panel.
    ///
    /// Not subject to the period-change lock; that lock only gates the
    /// user-facing commands.
    pub fn set_reference_date(&mut self, date: CalendarDate) -> Result<ReferenceDateChanged> {
        let event = ReferenceDateChanged {
            reference: date.first_of_month(),
        };
        // Validate the furthest panel before touching any state.
        event.reference.add_months(last_panel_offset(self.panels.len())?)?;

        self.reference = event.reference;
        for panel in &mut self.panels {
            panel.apply(&event, &self.locale, self.normalize_height)?;
        }
        debug!(reference = %event.reference, panels = self.panels.len(), "reference date changed");
        Ok(event)
    }

    /// Header text for the displayed period.
    ///
    /// `"Mar 2025"` for one month, `"Mar - May 2025"` within one year, and
    /// `"Nov 2025 - Jan 2026"` across years.
    pub fn period_label(&self, style: MonthNameStyle) -> String {
        let first = self.reference;
        let last = self.last_month();
        let first_name = self.locale.month_name(first.month(), style);
        if first.same_month(last) {
            return format!("{} {}", first_name, first.year());
        }
        let last_name = self.locale.month_name(last.month(), style);
        if first.year() == last.year() {
            format!("{} - {} {}", first_name, last_name, last.year())
        } else {
            format!(
                "{} {} - {} {}",
                first_name,
                first.year(),
                last_name,
                last.year()
            )
        }
    }

    /// Years offered by a year selector, newest first: from the reference
    /// year plus `start_offset` down to the reference year minus `end_offset`.
    ///
    /// The window follows the reference month as the user navigates. Offsets
    /// are clamped to `0..=MAX_YEAR_RANGE_OFFSET`.
    pub fn year_options(&self, start_offset: i32, end_offset: i32) -> Vec<i32> {
        let year = self.reference.year();
        let newest = year.saturating_add(start_offset.clamp(0, MAX_YEAR_RANGE_OFFSET));
        let oldest = year.saturating_sub(end_offset.clamp(0, MAX_YEAR_RANGE_OFFSET));
        (oldest..=newest).rev().collect()
    }

    /// The twelve month names, January first.
    pub fn month_options(&self, style: MonthNameStyle) -> Vec<String> {
        (1..=12).map(|m| self.locale.month_name(m, style)).collect()
    }

    fn ensure_unlocked(&self) -> Result<()> {
        if self.period_change_disabled {
            Err(PickerError::PeriodChangeDisabled)
        } else {
            Ok(())
        }
    }
}

/// Month offset of the last of `calendars` panels.
fn last_panel_offset(calendars: usize) -> Result<i32> {
    if calendars == 0 {
        return Err(PickerError::InvalidConfig(
            "a view needs at least one calendar".to_string(),
        ));
    }
    i32::try_from(calendars - 1)
        .map_err(|_| PickerError::InvalidConfig(format!("too many calendars: {}", calendars)))
}
