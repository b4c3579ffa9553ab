//! Conversion of the internal selection into the plain shape handed to consumers.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::selection::Selection;

/// Serializable selection value.
///
/// Serializes untagged: a closed range as `{"start": .., "end": ..}`, a multiple
/// selection as an array of dates, a single selection as a date string, and
/// nothing as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalSelection {
    Range {
        start: CalendarDate,
        end: CalendarDate,
    },
    Multiple(Vec<CalendarDate>),
    Single(CalendarDate),
    None,
}

impl ExternalSelection {
    pub fn is_none(&self) -> bool {
        matches!(self, ExternalSelection::None)
    }
}

/// Flatten a [`Selection`] for export.
///
/// An open range has no exportable value yet and becomes `None`; an empty
/// multiple selection stays an (empty) array.
pub fn normalize_for_export(selection: &Selection) -> ExternalSelection {
    match selection {
        Selection::Single(Some(date)) => ExternalSelection::Single(*date),
        Selection::Single(None) => ExternalSelection::None,
        Selection::Multiple(dates) => ExternalSelection::Multiple(dates.clone()),
        Selection::Range(_) => match selection.closed_range() {
            Some((start, end)) => ExternalSelection::Range { start, end },
            None => ExternalSelection::None,
        },
    }
}
