//! WASM bindings for datepick-core.
//!
//! Exposes month grid construction, disablement checks, and a stateful
//! `DatePicker` session to JavaScript via `wasm-bindgen`. Dates cross the
//! boundary as `YYYY-MM-DD` strings; grids, rules, configs, and selections
//! cross as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p datepick-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/datepick-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/datepick_wasm.wasm
//! ```

use datepick_core::{
    CalendarDate, CellState, DayState, DisablementRule, GridCell, MonthGrid, MonthNameStyle,
    PickerConfig, PickerSession, SelectionMode,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CellDto {
    date: String,
    label: u32,
    in_month: bool,
    today: bool,
    month_start: bool,
    month_end: bool,
    weekend: bool,
    /// Selection flags, present only for cells of a `DatePicker` session.
    #[serde(flatten)]
    state: Option<DayStateDto>,
}

impl CellDto {
    fn plain(cell: &GridCell, today: CalendarDate) -> Self {
        Self {
            date: cell.date.to_string(),
            label: cell.label(),
            in_month: cell.belongs_to_displayed_month,
            today: cell.belongs_to_displayed_month && cell.date == today,
            month_start: cell.is_month_start(),
            month_end: cell.is_month_end(),
            weekend: cell.is_weekend(),
            state: None,
        }
    }

    fn with_state(cell: &GridCell, state: CellState) -> Self {
        Self {
            date: cell.date.to_string(),
            label: cell.label(),
            in_month: state.in_month,
            today: state.today,
            month_start: state.month_start,
            month_end: state.month_end,
            weekend: state.weekend,
            state: Some(DayStateDto::from(state.day)),
        }
    }
}

#[derive(Serialize)]
struct GridDto {
    reference: String,
    weeks: Vec<Vec<CellDto>>,
}

impl GridDto {
    fn new(grid: &MonthGrid, cell: impl Fn(&GridCell) -> CellDto) -> Self {
        Self {
            reference: grid.reference().to_string(),
            weeks: grid
                .weeks()
                .iter()
                .map(|week| week.iter().map(&cell).collect())
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DayStateDto {
    selected: bool,
    range_start: bool,
    range_end: bool,
    between: bool,
    disabled: bool,
}

impl From<DayState> for DayStateDto {
    fn from(state: DayState) -> Self {
        Self {
            selected: state.selected,
            range_start: state.range_start,
            range_end: state.range_end,
            between: state.between,
            disabled: state.disabled,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_date(s: &str) -> Result<CalendarDate, JsValue> {
    CalendarDate::parse(s).map_err(js_err)
}

fn parse_rules(json: &str) -> Result<DisablementRule, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid disabledDates JSON: {}", e)))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// `today` from JavaScript, or the local date when omitted.
fn parse_today(today: Option<String>) -> Result<CalendarDate, JsValue> {
    match today.as_deref() {
        Some(s) => parse_date(s),
        None => Ok(CalendarDate::today()),
    }
}

// ---------------------------------------------------------------------------
// Stateless exports
// ---------------------------------------------------------------------------

/// Build the grid for the month containing `reference`.
///
/// Returns a JSON string `{reference, weeks}` where `weeks` is an array of
/// seven-cell rows. Each cell carries `date`, `label`, `inMonth`, `today`,
/// `monthStart`, `monthEnd` and `weekend`. `today` defaults to the local date.
#[wasm_bindgen(js_name = "buildMonthGrid")]
pub fn build_month_grid(
    reference: &str,
    normalize_height: bool,
    today: Option<String>,
) -> Result<String, JsValue> {
    let today = parse_today(today)?;
    let grid = datepick_core::build_month_grid(parse_date(reference)?, normalize_height);
    to_json(&GridDto::new(&grid, |cell| CellDto::plain(cell, today)))
}

/// Check one date against a `disabledDates` rule object (JSON).
#[wasm_bindgen(js_name = "isDisabled")]
pub fn is_disabled(date: &str, rules_json: &str) -> Result<bool, JsValue> {
    let rules = parse_rules(rules_json)?;
    Ok(datepick_core::is_disabled(parse_date(date)?, &rules))
}

/// True if any day between `start` and `end` (inclusive, either order) is disabled.
#[wasm_bindgen(js_name = "isRangeDisabled")]
pub fn is_range_disabled(start: &str, end: &str, rules_json: &str) -> Result<bool, JsValue> {
    let rules = parse_rules(rules_json)?;
    Ok(datepick_core::is_range_disabled(
        parse_date(start)?,
        parse_date(end)?,
        &rules,
    ))
}

// ---------------------------------------------------------------------------
// Stateful session
// ---------------------------------------------------------------------------

/// A picker session: selection state plus the displayed months.
///
/// Selection-returning methods yield the exported shape as JSON: `null`, a
/// date string, an array of date strings, or `{start, end}`.
#[wasm_bindgen]
pub struct DatePicker {
    session: PickerSession,
}

#[wasm_bindgen]
impl DatePicker {
    /// Create a session from a picker config JSON object (`{}` for defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<DatePicker, JsValue> {
        let config = PickerConfig::from_json(config_json).map_err(js_err)?;
        let session = config.into_session().map_err(js_err)?;
        Ok(DatePicker { session })
    }

    /// Handle a click on `date` and return the exported selection.
    pub fn activate(&mut self, date: &str) -> Result<String, JsValue> {
        self.session.on_date_activated(parse_date(date)?);
        to_json(&self.session.export())
    }

    /// Report the hovered date (`undefined` when the pointer leaves) and
    /// return the hover date that was kept.
    pub fn hover(&mut self, date: Option<String>) -> Result<Option<String>, JsValue> {
        let hovered = date.as_deref().map(parse_date).transpose()?;
        Ok(self
            .session
            .on_hover_change(hovered)
            .map(|d| d.to_string()))
    }

    #[wasm_bindgen(js_name = "isBetween")]
    pub fn is_between(&self, date: &str) -> Result<bool, JsValue> {
        Ok(self.session.is_between(parse_date(date)?))
    }

    #[wasm_bindgen(js_name = "isDisabled")]
    pub fn is_disabled(&self, date: &str) -> Result<bool, JsValue> {
        Ok(self.session.is_disabled(parse_date(date)?))
    }

    /// All rendering flags for one day as JSON.
    #[wasm_bindgen(js_name = "dayState")]
    pub fn day_state(&self, date: &str) -> Result<String, JsValue> {
        let state = self.session.day_state(parse_date(date)?);
        to_json(&DayStateDto::from(state))
    }

    /// Switch to `"single"`, `"multiple"` or `"range"`, clearing the selection.
    #[wasm_bindgen(js_name = "setMode")]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: SelectionMode =
            serde_json::from_value(serde_json::Value::String(mode.to_owned()))
                .map_err(|_| JsValue::from_str(&format!("Unknown selection mode: {}", mode)))?;
        self.session.set_mode(mode);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn selection(&self) -> Result<String, JsValue> {
        to_json(&self.session.export())
    }

    /// Grids for every displayed month, in display order, with each cell's
    /// selection flags merged in. Padding cells never repeat the selection
    /// shown on a neighbouring panel. `today` defaults to the local date.
    pub fn grids(&self, today: Option<String>) -> Result<String, JsValue> {
        let today = parse_today(today)?;
        let dtos: Vec<GridDto> = self
            .session
            .grids()
            .map(|grid| {
                GridDto::new(grid, |cell| {
                    CellDto::with_state(cell, self.session.cell_state(cell, today))
                })
            })
            .collect();
        to_json(&dtos)
    }

    /// The displayed reference month (first of month) as `YYYY-MM-DD`.
    pub fn reference(&self) -> String {
        self.session.reference().to_string()
    }

    /// Move one month forward and return the new reference date.
    #[wasm_bindgen(js_name = "nextMonth")]
    pub fn next_month(&mut self) -> Result<String, JsValue> {
        let changed = self.session.next_month().map_err(js_err)?;
        Ok(changed.reference.to_string())
    }

    #[wasm_bindgen(js_name = "previousMonth")]
    pub fn previous_month(&mut self) -> Result<String, JsValue> {
        let changed = self.session.previous_month().map_err(js_err)?;
        Ok(changed.reference.to_string())
    }

    /// Jump to `month` (1-12) of the displayed year.
    #[wasm_bindgen(js_name = "setMonth")]
    pub fn set_month(&mut self, month: u32) -> Result<String, JsValue> {
        let changed = self.session.set_month(month).map_err(js_err)?;
        Ok(changed.reference.to_string())
    }

    #[wasm_bindgen(js_name = "setYear")]
    pub fn set_year(&mut self, year: i32) -> Result<String, JsValue> {
        let changed = self.session.set_year(year).map_err(js_err)?;
        Ok(changed.reference.to_string())
    }

    /// Header label such as `"Jun - Aug 2025"`; `long` selects full month names.
    #[wasm_bindgen(js_name = "periodLabel")]
    pub fn period_label(&self, long: bool) -> String {
        let style = if long {
            MonthNameStyle::Long
        } else {
            MonthNameStyle::Short
        };
        self.session.period_label(style)
    }

    /// Years offered by the year selector, newest first.
    #[wasm_bindgen(js_name = "yearOptions")]
    pub fn year_options(&self) -> Vec<i32> {
        self.session.year_options()
    }
}
