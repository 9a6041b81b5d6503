//! Console Logger
//!
//! `log` backend for wasm pages. Lines go to the browser console, and the
//! most recent ones are kept in a ring buffer so a page can dump them later
//! (`dumpLog()` from the devtools console).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::prelude::*;

/// Lines kept by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Console logger with a bounded history
pub struct ConsoleLogger {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        let lines = match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.iter().cloned().collect()
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(&timestamp(), record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// `2026-10-18T09:12:01.000Z WARN oil_log_ui::controller: message`
pub fn format_line(stamp: &str, record: &Record) -> String {
    if stamp.is_empty() {
        format!("{} {}: {}", record.level(), record.target(), record.args())
    } else {
        format!("{} {} {}: {}", stamp, record.level(), record.target(), record.args())
    }
}

#[cfg(target_arch = "wasm32")]
fn timestamp() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{}.{:03}", d.as_secs(), d.subsec_millis()))
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Change the level after `init`
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Lines held by the global logger (empty before `init`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[wasm_bindgen(js_name = dumpLog)]
pub fn dump_log() -> String {
    recent_lines().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let logger = ConsoleLogger::new(2);
        logger.push("a".to_string());
        logger.push("b".to_string());
        logger.push("c".to_string());
        assert_eq!(logger.recent(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = ConsoleLogger::new(0);
        logger.push("a".to_string());
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_format_line() {
        let line = format_line(
            "2026-10-18T09:12:01.000Z",
            &Record::builder()
                .args(format_args!("loaded {} rows", 3))
                .level(Level::Info)
                .target("oil_log_ui::controller")
                .build(),
        );
        assert_eq!(line, "2026-10-18T09:12:01.000Z INFO oil_log_ui::controller: loaded 3 rows");
    }

    #[test]
    fn test_format_line_without_stamp() {
        let line = format_line(
            "",
            &Record::builder()
                .args(format_args!("boom"))
                .level(Level::Error)
                .target("app")
                .build(),
        );
        assert_eq!(line, "ERROR app: boom");
    }
}
