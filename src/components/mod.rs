//! UI Components
//!
//! Leptos components mounted into page elements.

mod record_table;

pub use record_table::RecordTable;
