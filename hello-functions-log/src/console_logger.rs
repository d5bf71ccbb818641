use std::fmt::Write;

use log::{Level, LevelFilter, Log, SetLoggerError, set_max_level};
use time::format_description::well_known::Rfc3339;

/// Formats log entries and writes them to standard output, one line per
/// entry.
///
/// Each line carries the severity, an RFC 3339 UTC timestamp, and the
/// target that emitted the entry. The backend serves two consumers: it can
/// be installed behind the process-wide `log` facade via [ConsoleLog::init],
/// and it backs the per-invocation loggers created by
/// [crate::ConsoleLoggerProvider].
pub struct ConsoleLog {
    level: LevelFilter,
}

impl ConsoleLog {
    /// Creates a backend that drops entries more verbose than `level`.
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Installs a `ConsoleLog` as the process-wide `log` backend.
    ///
    /// You **must** only call this function once.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        set_max_level(level);
        log::set_boxed_logger(Box::new(ConsoleLog::new(level)))
    }

    pub(crate) fn emit(&self, level: Level, target: &str, message: &str) {
        if level <= self.level {
            println!("{}", format_entry(level, target, message));
        }
    }
}

fn format_entry(level: Level, target: &str, message: &str) -> String {
    let mut buffer = String::with_capacity(128);
    let utc_now = time::OffsetDateTime::now_utc();
    let timestamp = utc_now.format(&Rfc3339).unwrap_or("<unknown>".to_string());
    let level = level.as_str();
    let _ = write!(&mut buffer, "{level} {timestamp} {target} {message}");
    buffer
}

impl Log for ConsoleLog {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.emit(record.level(), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}
