//! Table Model
//!
//! What the records table shows, independent of the DOM.

use crate::models::Record;

/// One rendered body row, cells in column order
pub type RowCells = [String; 7];

/// Content of the table mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableState {
    /// "No data" placeholder, no table markup
    Empty,
    /// Header plus one row per record, in input order
    Rows(Vec<RowCells>),
}

impl TableState {
    pub fn from_rows(rows: Option<Vec<Record>>) -> Self {
        match rows {
            Some(rows) if !rows.is_empty() => {
                TableState::Rows(rows.iter().map(Record::cells).collect())
            }
            _ => TableState::Empty,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            TableState::Empty => 0,
            TableState::Rows(rows) => rows.len(),
        }
    }
}
