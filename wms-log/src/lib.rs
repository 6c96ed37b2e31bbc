use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger;
pub static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the logger and cap output at `level`. Fails if a logger is
/// already installed; the level is only applied on success.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&CONSOLE_LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

fn format_record(now: DateTime<Utc>, level: Level, target: &str, args: &std::fmt::Arguments) -> String {
    format!("[{}] {} {} - {}", now.to_rfc3339(), level, target, args)
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(Utc::now(), record.level(), record.target(), record.args());
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_family = "wasm")]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error => gloo_console::error!(line),
        Level::Warn => gloo_console::warn!(line),
        _ => gloo_console::log!(line),
    }
}

#[cfg(not(target_family = "wasm"))]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error | Level::Warn => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}
