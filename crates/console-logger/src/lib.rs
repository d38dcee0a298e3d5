//! Console Logger
//!
//! `tracing-subscriber` fmt layer wired to the browser console. Each event
//! is formatted into one line and handed to the `console.*` method that
//! matches its level (stderr off-wasm).

use std::fmt;
use std::io;

use chrono::Utc;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Wall-clock `HH:MM:SS.mmm`; `SystemTime` is unavailable on wasm32
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Utc::now().format("%H:%M:%S%.3f"))
    }
}

/// Hands out one [`ConsoleWriter`] per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Collects one formatted event and emits it when dropped
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Buffered text without the trailing newline
    pub fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            emit(self.level, &self.line());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global subscriber. Call once at start-up.
pub fn init(max_level: LevelFilter) -> Result<(), LoggerError> {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_timer(ClockTime)
        .with_writer(ConsoleMakeWriter)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_writer_collects_one_line() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        write!(writer, "12:00:00.000  WARN ").unwrap();
        writeln!(writer, "item_list_ui: config ignored").unwrap();

        assert_eq!(writer.line(), "12:00:00.000  WARN item_list_ui: config ignored");
    }

    #[test]
    fn test_default_writer_is_info() {
        assert_eq!(ConsoleMakeWriter.make_writer().level(), Level::INFO);
    }

    #[test]
    fn test_empty_writer_has_no_line() {
        let writer = ConsoleWriter::new(Level::ERROR);
        assert_eq!(writer.line(), "");
    }

    #[test]
    fn test_clock_time_format() {
        let mut out = String::new();
        ClockTime.format_time(&mut Writer::new(&mut out)).unwrap();

        let parts: Vec<&str> = out.split(|c| c == ':' || c == '.').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[3].len(), 3);
    }
}
