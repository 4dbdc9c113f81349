/// Front-end neutral view model for the thought list
///
/// The window never renders thoughts directly. It turns the ordered read into
/// a flat sequence of rows, where a date header is inserted every time the
/// date changes, and hands that sequence to whatever draws it.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Thought;

/// One line of the thought list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Row {
    /// Marks the start of a new day; never selectable
    Header(NaiveDate),
    /// A thought's text; selectable, never editable
    Entry(String),
}

impl Row {
    /// Text shown for this row
    pub fn label(&self) -> String {
        match self {
            Row::Header(date) => format!("--- {} ---", date.format("%Y-%m-%d")),
            Row::Entry(text) => format!("  - {}", text),
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, Row::Entry(_))
    }
}

/// Build the list rows from thoughts already in read order
///
/// Input is expected newest-first; a header is emitted whenever a thought's
/// date differs from the one before it.
pub fn build_rows(thoughts: &[Thought]) -> Vec<Row> {
    let mut rows = Vec::with_capacity(thoughts.len() * 2);
    let mut current_date: Option<NaiveDate> = None;

    for thought in thoughts {
        if current_date != Some(thought.date) {
            rows.push(Row::Header(thought.date));
            current_date = Some(thought.date);
        }
        rows.push(Row::Entry(thought.text.clone()));
    }

    rows
}

/// Index of the nearest selectable row at or past `from`, scanning forward or backward
pub fn next_selectable(rows: &[Row], from: usize, forward: bool) -> Option<usize> {
    if forward {
        (from..rows.len()).find(|&i| rows[i].is_selectable())
    } else {
        (0..=from.min(rows.len().checked_sub(1)?))
            .rev()
            .find(|&i| rows[i].is_selectable())
    }
}
