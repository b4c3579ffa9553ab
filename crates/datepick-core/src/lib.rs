//! # datepick-core
//!
//! Date-selection state engine for calendar pickers.
//!
//! Given a reference month, a selection mode, and a set of disablement rules,
//! the engine derives the month grid a calendar renders and manages the
//! selection as the user clicks and hovers over day cells. Rendering is left to
//! the consumer; it calls in through a small set of queries and commands.
//!
//! ## Quick start
//!
//! ```rust
//! use datepick_core::{CalendarDate, DisablementRule, SelectionEngine, SelectionMode};
//! use datepick_core::{normalize_for_export, ExternalSelection};
//!
//! let d = |s: &str| CalendarDate::parse(s).unwrap();
//! let mut engine = SelectionEngine::new(SelectionMode::Range, DisablementRule::new());
//!
//! engine.on_date_activated(d("2025-03-10"));
//! engine.on_date_activated(d("2025-03-05"));
//!
//! assert_eq!(
//!     normalize_for_export(engine.selection()),
//!     ExternalSelection::Range { start: d("2025-03-05"), end: d("2025-03-10") }
//! );
//! ```
//!
//! ## Modules
//!
//! - [`date`]: `CalendarDate` and boundary parsing
//! - [`locale`]: calendar locale port (week start, month lengths, names)
//! - [`grid`]: month grid construction
//! - [`disable`]: disablement rules and evaluation
//! - [`selection`]: the selection state machine
//! - [`export`]: plain serializable selection shape
//! - [`view`]: month navigation across one or more calendars
//! - [`config`]: JSON picker configuration
//! - [`session`]: one picker session (engine + view)
//! - [`error`]: Error types

pub mod config;
pub mod date;
pub mod disable;
pub mod error;
pub mod export;
pub mod grid;
pub mod locale;
pub mod selection;
pub mod session;
pub mod view;

pub use config::PickerConfig;
pub use date::CalendarDate;
pub use disable::{is_disabled, is_range_disabled, DateSpan, DisablementRule};
pub use error::PickerError;
pub use export::{normalize_for_export, ExternalSelection};
pub use grid::{build_month_grid, build_month_grid_with, GridCell, MonthGrid};
pub use locale::{CalendarLocale, Gregorian, MonthNameStyle};
pub use selection::{
    CellContext, CellState, DateRange, DayState, Selection, SelectionEngine, SelectionMode,
};
pub use session::PickerSession;
pub use view::{CalendarPanel, MonthView, ReferenceDateChanged};
