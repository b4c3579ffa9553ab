//! Month grid construction.
//!
//! A grid is the week-by-week table a calendar renders for one month: whole
//! weeks from the week containing the 1st to the week containing the last day,
//! with the padding days from adjacent months tagged as such. With
//! `normalize_height` the grid is always padded to six weeks so several
//! calendars shown side by side line up.

use chrono::Weekday;
use serde::Serialize;

use crate::date::CalendarDate;
use crate::locale::{CalendarLocale, Gregorian};

/// Weeks in a height-normalized grid.
pub const NORMALIZED_WEEKS: usize = 6;

/// One day cell of a [`MonthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub date: CalendarDate,
    /// False for padding days taken from the previous or next month.
    pub belongs_to_displayed_month: bool,
}

impl GridCell {
    pub fn label(&self) -> u32 {
        self.date.label()
    }

    /// First day of the displayed month (never true for padding cells).
    pub fn is_month_start(&self) -> bool {
        self.belongs_to_displayed_month && self.date.is_first_of_month()
    }

    /// Last day of the displayed month (never true for padding cells).
    pub fn is_month_end(&self) -> bool {
        self.belongs_to_displayed_month && self.date.is_last_of_month()
    }

    pub fn is_weekend(&self) -> bool {
        self.date.is_weekend()
    }
}

/// Week rows for one displayed month. Every row has exactly seven cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    reference: CalendarDate,
    week_start: Weekday,
    weeks: Vec<[GridCell; 7]>,
}

impl MonthGrid {
    /// First day of the displayed month.
    pub fn reference(&self) -> CalendarDate {
        self.reference
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn weeks(&self) -> &[[GridCell; 7]] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.weeks.iter().flatten()
    }

    /// The grid transposed into one column per weekday, in week-start order.
    pub fn columns(&self) -> Vec<Vec<GridCell>> {
        (0..7)
            .map(|col| self.weeks.iter().map(|week| week[col]).collect())
            .collect()
    }

    /// First cell of the grid (may belong to the previous month).
    pub fn first_day(&self) -> CalendarDate {
        self.weeks
            .first()
            .map(|w| w[0].date)
            .unwrap_or(self.reference)
    }

    /// Last cell of the grid (may belong to the next month).
    pub fn last_day(&self) -> CalendarDate {
        self.weeks
            .last()
            .map(|w| w[6].date)
            .unwrap_or(self.reference)
    }

    /// The cell showing `date`, if the grid covers it.
    pub fn cell_for(&self, date: CalendarDate) -> Option<&GridCell> {
        self.cells().find(|c| c.date == date)
    }

    /// Whether `date` falls in the displayed month.
    pub fn displays(&self, date: CalendarDate) -> bool {
        self.reference.same_month(date)
    }
}

/// Build the grid for `reference_date`'s month with Sunday-first weeks.
pub fn build_month_grid(reference_date: CalendarDate, normalize_height: bool) -> MonthGrid {
    build_month_grid_with(&Gregorian::default(), reference_date, normalize_height)
}

/// Build the grid for `reference_date`'s month using `locale` for week start
/// and month length.
///
/// The grid starts at the beginning of the week holding the 1st and ends with
/// the week holding the last day. When `normalize_height` is set, trailing
/// weeks from the next month are appended until there are six.
pub fn build_month_grid_with<L>(
    locale: &L,
    reference_date: CalendarDate,
    normalize_height: bool,
) -> MonthGrid
where
    L: CalendarLocale + ?Sized,
{
    let first = reference_date.first_of_month();
    let month_len = locale.days_in_month(first.year(), first.month());
    let last = first.add_days(i64::from(month_len) - 1);

    let leading = locale.column_of(first);
    let trailing = 6 - locale.column_of(last);
    let grid_start = first.add_days(-i64::from(leading));

    let mut week_count = ((leading + month_len + trailing) / 7) as usize;
    if normalize_height {
        week_count = week_count.max(NORMALIZED_WEEKS);
    }

    let weeks: Vec<[GridCell; 7]> = (0..week_count)
        .map(|w| {
            std::array::from_fn(|d| {
                let date = grid_start.add_days((w * 7 + d) as i64);
                GridCell {
                    date,
                    belongs_to_displayed_month: date.same_month(first),
                }
            })
        })
        .collect();

    tracing::trace!(month = %first, weeks = weeks.len(), normalize_height, "built month grid");

    MonthGrid {
        reference: first,
        week_start: locale.week_start(),
        weeks,
    }
}
