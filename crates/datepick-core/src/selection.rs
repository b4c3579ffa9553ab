//! Selection state machine.
//!
//! [`SelectionEngine`] owns the `{mode, selection, hover}` triple of one picker
//! session and is the only thing that mutates it. Every user click goes
//! through [`SelectionEngine::on_date_activated`], every pointer move through
//! [`SelectionEngine::on_hover_change`]; everything a renderer needs per cell
//! (`is_between`, `is_selected`, `day_state`, ...) is derived on demand from
//! that triple.
//!
//! Range mode walks `Empty -> Open(start) -> Closed(start, end) -> Open(..)`.
//! Closing a range is refused, and the selection cleared, when the prospective
//! interval contains a disabled day.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::CalendarDate;
use crate::disable::{self, DisablementRule};
use crate::grid::GridCell;

/// How clicks are interpreted. Changing it resets the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
    Range,
}

/// A range selection. `end` is `None` while the range is open.
///
/// The engine keeps `start <= end` whenever `end` is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: CalendarDate,
    pub end: Option<CalendarDate>,
}

impl DateRange {
    pub fn open(start: CalendarDate) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn is_closed(&self) -> bool {
        self.end.is_some()
    }
}

/// The committed selection, shaped by the mode it was made in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "selection", rename_all = "lowercase")]
pub enum Selection {
    Single(Option<CalendarDate>),
    /// Unique by day, in insertion order.
    Multiple(Vec<CalendarDate>),
    Range(Option<DateRange>),
}

impl Selection {
    /// The empty selection for `mode`.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multiple => Selection::Multiple(Vec::new()),
            SelectionMode::Range => Selection::Range(None),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multiple(_) => SelectionMode::Multiple,
            Selection::Range(_) => SelectionMode::Range,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(d) => d.is_none(),
            Selection::Multiple(ds) => ds.is_empty(),
            Selection::Range(r) => r.is_none(),
        }
    }

    /// The range, if this is a range selection with at least a start.
    pub fn range(&self) -> Option<DateRange> {
        match self {
            Selection::Range(r) => *r,
            _ => None,
        }
    }

    /// The range's `(start, end)` when it is closed.
    pub fn closed_range(&self) -> Option<(CalendarDate, CalendarDate)> {
        self.range().and_then(|r| r.end.map(|end| (r.start, end)))
    }
}

/// Every derived per-day flag a renderer needs, computed in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayState {
    pub selected: bool,
    pub range_start: bool,
    pub range_end: bool,
    pub between: bool,
    pub disabled: bool,
}

/// Where a grid cell is drawn, for [`SelectionEngine::cell_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellContext {
    /// The date flagged as today.
    pub today: CalendarDate,
    /// A navigation header is drawn above the grid.
    pub header: bool,
    /// Calendars shown side by side.
    pub calendars: usize,
}

impl CellContext {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            today,
            header: false,
            calendars: 1,
        }
    }

    pub fn with_header(mut self, calendars: usize) -> Self {
        self.header = true;
        self.calendars = calendars;
        self
    }
}

/// Everything a renderer needs for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CellState {
    #[serde(flatten)]
    pub day: DayState,
    pub in_month: bool,
    /// Only ever set on in-month cells.
    pub today: bool,
    pub month_start: bool,
    pub month_end: bool,
    pub weekend: bool,
}

/// Owner of one session's selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEngine {
    mode: SelectionMode,
    selection: Selection,
    hover: Option<CalendarDate>,
    rules: DisablementRule,
}

impl SelectionEngine {
    pub fn new(mode: SelectionMode, rules: DisablementRule) -> Self {
        Self {
            mode,
            selection: Selection::empty(mode),
            hover: None,
            rules,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn hover(&self) -> Option<CalendarDate> {
        self.hover
    }

    pub fn rules(&self) -> &DisablementRule {
        &self.rules
    }

    /// Replace the disablement rules. The current selection is left as is.
    pub fn set_rules(&mut self, rules: DisablementRule) {
        self.rules = rules;
    }

    /// Switch modes. This is a hard reset, not a conversion.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        debug!(from = ?self.mode, to = ?mode, "selection mode changed");
        self.mode = mode;
        self.selection = Selection::empty(mode);
        self.hover = None;
    }

    /// Clear the selection and hover, keeping the mode.
    pub fn reset(&mut self) {
        debug!(mode = ?self.mode, "selection reset");
        self.selection = Selection::empty(self.mode);
        self.hover = None;
    }

    /// Apply a click on `clicked` and return the resulting selection.
    ///
    /// Single and Multiple activations are not checked against the rules; the
    /// caller is expected to keep disabled cells inert. Range completions are
    /// checked, because a closed range must never span a disabled day.
    pub fn on_date_activated(&mut self, clicked: CalendarDate) -> &Selection {
        match &mut self.selection {
            Selection::Single(current) => {
                *current = Some(clicked);
                debug!(date = %clicked, "single selection set");
            }
            Selection::Multiple(dates) => {
                if let Some(pos) = dates.iter().position(|d| *d == clicked) {
                    dates.remove(pos);
                    debug!(date = %clicked, count = dates.len(), "date removed from selection");
                } else {
                    dates.push(clicked);
                    debug!(date = %clicked, count = dates.len(), "date added to selection");
                }
            }
            Selection::Range(range) => {
                let previous = *range;
                *range = Self::next_range(previous, clicked, &self.rules);
                // Hover previews the pending end of the previous open range.
                if *range != previous {
                    self.hover = None;
                }
            }
        }
        &self.selection
    }

    fn next_range(
        current: Option<DateRange>,
        clicked: CalendarDate,
        rules: &DisablementRule,
    ) -> Option<DateRange> {
        let start = match current {
            Some(DateRange { start, end: None }) => start,
            // Empty or closed: begin a new range.
            _ => {
                debug!(start = %clicked, "range opened");
                return Some(DateRange::open(clicked));
            }
        };

        if clicked == start {
            return current;
        }

        let (lo, hi) = if clicked < start {
            (clicked, start)
        } else {
            (start, clicked)
        };

        if disable::is_range_disabled(lo, hi, rules) {
            debug!(start = %lo, end = %hi, "range crosses a disabled date; selection cleared");
            return None;
        }

        debug!(start = %lo, end = %hi, "range closed");
        Some(DateRange {
            start: lo,
            end: Some(hi),
        })
    }

    /// Update the hover preview and return it.
    ///
    /// The preview is only kept in Range mode while the range is open; in every
    /// other state it is cleared whatever `hovered` is.
    pub fn on_hover_change(&mut self, hovered: Option<CalendarDate>) -> Option<CalendarDate> {
        self.hover = match self.selection.range() {
            Some(range) if range.is_open() => hovered,
            _ => None,
        };
        self.hover
    }

    /// Whether `date` lies strictly inside the committed range, or strictly
    /// between an open range's start and the hover preview.
    pub fn is_between(&self, date: CalendarDate) -> bool {
        let Some(range) = self.selection.range() else {
            return false;
        };
        match (range.end, self.hover) {
            (Some(end), _) => range.start < date && date < end,
            (None, Some(hover)) => {
                (range.start < date && date < hover) || (hover < date && date < range.start)
            }
            (None, None) => false,
        }
    }

    /// Whether `date` is part of the committed selection.
    pub fn is_selected(&self, date: CalendarDate) -> bool {
        match &self.selection {
            Selection::Single(current) => *current == Some(date),
            Selection::Multiple(dates) => dates.contains(&date),
            Selection::Range(_) => self.is_range_start(date) || self.is_range_end(date),
        }
    }

    pub fn is_range_start(&self, date: CalendarDate) -> bool {
        self.selection.range().is_some_and(|r| r.start == date)
    }

    pub fn is_range_end(&self, date: CalendarDate) -> bool {
        self.selection.range().is_some_and(|r| r.end == Some(date))
    }

    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        disable::is_disabled(date, &self.rules)
    }

    pub fn day_state(&self, date: CalendarDate) -> DayState {
        DayState {
            selected: self.is_selected(date),
            range_start: self.is_range_start(date),
            range_end: self.is_range_end(date),
            between: self.is_between(date),
            disabled: self.is_disabled(date),
        }
    }

    /// Flags for `cell` as drawn in `ctx`.
    ///
    /// Padding cells under a header never shade as between, and when several
    /// calendars are shown they never show as selected either: the same day is
    /// drawn in-month on a neighbouring panel.
    pub fn cell_state(&self, cell: &GridCell, ctx: CellContext) -> CellState {
        let in_month = cell.belongs_to_displayed_month;
        let mut day = self.day_state(cell.date);
        if !in_month && ctx.header {
            day.between = false;
            if ctx.calendars > 1 {
                day.selected = false;
            }
        }
        CellState {
            day,
            in_month,
            today: in_month && cell.date == ctx.today,
            month_start: cell.is_month_start(),
            month_end: cell.is_month_end(),
            weekend: cell.is_weekend(),
        }
    }
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new(SelectionMode::default(), DisablementRule::default())
    }
}
