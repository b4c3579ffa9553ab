//! One picker session: a selection engine plus the months it is shown over.
//!
//! A session is a plain owned value. Whatever drives the UI holds it and calls
//! into it; there is no shared or global state, so independent sessions can
//! live side by side (one per user in a server, one per widget in a page).

use crate::date::CalendarDate;
use crate::disable::{self, DisablementRule};
use crate::error::Result;
use crate::export::{normalize_for_export, ExternalSelection};
use crate::grid::{GridCell, MonthGrid};
use crate::locale::{CalendarLocale, Gregorian, MonthNameStyle};
use crate::selection::{
    CellContext, CellState, DayState, Selection, SelectionEngine, SelectionMode,
};
use crate::view::{
    MonthView, ReferenceDateChanged, DEFAULT_YEAR_RANGE_END_OFFSET,
    DEFAULT_YEAR_RANGE_START_OFFSET,
};

#[derive(Debug, Clone)]
pub struct PickerSession<L = Gregorian> {
    engine: SelectionEngine,
    view: MonthView<L>,
    year_range_start_offset: i32,
    year_range_end_offset: i32,
}

impl<L: CalendarLocale> PickerSession<L> {
    pub fn new(engine: SelectionEngine, view: MonthView<L>) -> Self {
        Self {
            engine,
            view,
            year_range_start_offset: DEFAULT_YEAR_RANGE_START_OFFSET,
            year_range_end_offset: DEFAULT_YEAR_RANGE_END_OFFSET,
        }
    }

    /// Override the year selector window (years after / before the reference year).
    pub fn with_year_range(mut self, start_offset: i32, end_offset: i32) -> Self {
        self.year_range_start_offset = start_offset;
        self.year_range_end_offset = end_offset;
        self
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SelectionEngine {
        &mut self.engine
    }

    pub fn view(&self) -> &MonthView<L> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut MonthView<L> {
        &mut self.view
    }

    // -- selection ----------------------------------------------------------

    pub fn mode(&self) -> SelectionMode {
        self.engine.mode()
    }

    pub fn selection(&self) -> &Selection {
        self.engine.selection()
    }

    pub fn hover(&self) -> Option<CalendarDate> {
        self.engine.hover()
    }

    pub fn on_date_activated(&mut self, clicked: CalendarDate) -> &Selection {
        self.engine.on_date_activated(clicked)
    }

    pub fn on_hover_change(&mut self, hovered: Option<CalendarDate>) -> Option<CalendarDate> {
        self.engine.on_hover_change(hovered)
    }

    pub fn is_between(&self, date: CalendarDate) -> bool {
        self.engine.is_between(date)
    }

    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        self.engine.is_disabled(date)
    }

    pub fn is_range_disabled(&self, start: CalendarDate, end: CalendarDate) -> bool {
        disable::is_range_disabled(start, end, self.engine.rules())
    }

    pub fn rules(&self) -> &DisablementRule {
        self.engine.rules()
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.engine.set_mode(mode);
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn day_state(&self, date: CalendarDate) -> DayState {
        self.engine.day_state(date)
    }

    /// Flags for `cell` of one of this session's grids. A session always draws
    /// a header, so padding cells are suppressed accordingly.
    pub fn cell_state(&self, cell: &GridCell, today: CalendarDate) -> CellState {
        let ctx = CellContext::new(today).with_header(self.view.calendars());
        self.engine.cell_state(cell, ctx)
    }

    /// The selection in its exported, serializable form.
    pub fn export(&self) -> ExternalSelection {
        normalize_for_export(self.engine.selection())
    }

    // -- months -------------------------------------------------------------

    pub fn reference(&self) -> CalendarDate {
        self.view.reference()
    }

    pub fn grids(&self) -> impl Iterator<Item = &MonthGrid> {
        self.view.grids()
    }

    pub fn next_month(&mut self) -> Result<ReferenceDateChanged> {
        self.view.next_month()
    }

    pub fn previous_month(&mut self) -> Result<ReferenceDateChanged> {
        self.view.previous_month()
    }

    pub fn set_month(&mut self, month: u32) -> Result<ReferenceDateChanged> {
        self.view.set_month(month)
    }

    pub fn set_year(&mut self, year: i32) -> Result<ReferenceDateChanged> {
        self.view.set_year(year)
    }

    pub fn set_reference_date(&mut self, date: CalendarDate) -> Result<ReferenceDateChanged> {
        self.view.set_reference_date(date)
    }

    pub fn period_label(&self, style: MonthNameStyle) -> String {
        self.view.period_label(style)
    }

    /// Years for a year selector, using the session's configured window.
    pub fn year_options(&self) -> Vec<i32> {
        self.view
            .year_options(self.year_range_start_offset, self.year_range_end_offset)
    }
}
