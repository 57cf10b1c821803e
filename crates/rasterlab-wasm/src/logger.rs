//! `log` backend that forwards records to the browser console.
//!
//! Error and warn records go to `console.error` / `console.warn`, info to
//! `console.info`, and debug/trace to `console.debug`, so the browser's own
//! level filter applies on top of ours.

use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        level_enabled(metadata.level(), log::max_level())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record.level(), record.target(), &record.args().to_string());
        write_console(record.level(), &line);
    }

    fn flush(&self) {}
}

fn level_enabled(level: Level, max: LevelFilter) -> bool {
    level <= max
}

fn format_record(level: Level, target: &str, msg: &str) -> String {
    format!("[{:>5}] {}: {}", level, target, msg)
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Parse a level name such as `"debug"`; unknown names give `None`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Install the console logger. Calling it again only updates the level.
pub fn init(level: LevelFilter) {
    // A second set_logger fails; the level still applies.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
