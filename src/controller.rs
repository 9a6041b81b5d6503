//! Page Controller
//!
//! Reads the page controls, drives the records API and updates the table
//! and status line. The DOM is reached only through `PageSurface`.

use std::cell::Cell;

use crate::api::{RecordsApi, RowQuery};
use crate::error::UiError;
use crate::i18n::Labels;
use crate::models::{NewRecord, WriteResponse};
use crate::table::TableState;

pub const SUCCESS_COLOR: &str = "#0a7c2f";
pub const FAILURE_COLOR: &str = "#b80d2e";

/// Color of the status line after a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Failure,
}

impl StatusTone {
    pub fn color(self) -> &'static str {
        match self {
            StatusTone::Success => SUCCESS_COLOR,
            StatusTone::Failure => FAILURE_COLOR,
        }
    }
}

/// The page elements the controller works with
pub trait PageSurface {
    /// Raw search text, `None` when the page has no search control
    fn search_text(&self) -> Option<String>;
    /// Raw filter value, `None` when the page has no filter control
    fn filter_value(&self) -> Option<String>;
    /// Replace the table mount content
    fn render(&self, state: TableState);
    /// Current values of the seven form inputs, verbatim
    fn form_values(&self) -> NewRecord;
    fn reset_form(&self);
    /// Does nothing when the page has no status element
    fn show_status(&self, text: &str, tone: StatusTone);
}

/// What a `load()` did with its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Table replaced with this many rows (0 = placeholder)
    Rendered(usize),
    /// Backend answered `success: false`; table untouched
    Rejected,
    /// A newer load was issued meanwhile; response dropped
    Stale,
}

/// Result of a form submission that reached the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub saved: bool,
    pub status: String,
}

/// Status line text and tone for a write reply
pub fn status_for(response: &WriteResponse, labels: &Labels) -> (String, StatusTone) {
    let tone = if response.success { StatusTone::Success } else { StatusTone::Failure };
    let text = match response.message.as_deref() {
        Some(message) if !message.is_empty() => message.to_string(),
        _ if response.success => labels.saved.to_string(),
        _ => labels.failed.to_string(),
    };
    (text, tone)
}

pub struct PageController<A, S> {
    api: A,
    surface: S,
    labels: &'static Labels,
    writable: bool,
    /// Ticket of the most recently issued load
    latest: Cell<u64>,
}

impl<A: RecordsApi, S: PageSurface> PageController<A, S> {
    pub fn new(api: A, surface: S, labels: &'static Labels, writable: bool) -> Self {
        Self {
            api,
            surface,
            labels,
            writable,
            latest: Cell::new(0),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Fetch rows for the current search/filter and render them
    pub async fn load(&self) -> Result<LoadOutcome, UiError> {
        let query =
            RowQuery::from_controls(self.surface.search_text(), self.surface.filter_value());
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);

        let response = self.api.fetch_rows(&query).await?;

        let latest = self.latest.get();
        if ticket != latest {
            log::debug!("Dropping response of load #{} (latest is #{})", ticket, latest);
            return Ok(LoadOutcome::Stale);
        }
        if !response.success {
            log::debug!("Load #{} reported failure, table left as is", ticket);
            return Ok(LoadOutcome::Rejected);
        }

        let state = TableState::from_rows(response.rows);
        let count = state.row_count();
        self.surface.render(state);
        log::debug!("Load #{} rendered {} rows", ticket, count);
        Ok(LoadOutcome::Rendered(count))
    }

    /// Send the form as a new record, then show the status, reset the form
    /// and reload the table whatever the backend answered
    ///
    /// A transport failure returns early: no status, no reset, no reload.
    pub async fn submit(&self) -> Result<WriteOutcome, UiError> {
        if !self.writable {
            return Err(UiError::ReadOnlyPage);
        }

        let record = self.surface.form_values();
        let response = self.api.create_record(&record).await?;

        let (status, tone) = status_for(&response, self.labels);
        if response.success {
            log::info!("Saved record for plate '{}'", record.plate);
        } else {
            log::warn!("Backend refused record: {}", status);
        }
        self.surface.show_status(&status, tone);
        self.surface.reset_form();

        if let Err(err) = self.load().await {
            log::error!("Reload after save failed: {}", err);
        }

        Ok(WriteOutcome {
            saved: response.success,
            status,
        })
    }
}
