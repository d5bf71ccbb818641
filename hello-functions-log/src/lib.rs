//! `log` adapter for hello Functions
//!
//! This crate adapts [`log`](https://docs.rs/log) to the function host.
//! `log` is a standard logging crate, used widely across the ecosystem.
//! The backend writes formatted, timestamp-enriched lines to standard
//! output, and the provider adapter exposes it through the host's
//! logger-provider capability so startup code can register it as a
//! singleton.
//!
//! You are likely to be interested in the sibling crates:
//! * `hello-functions`: the functions themselves, plus their startup routine.
//! * `hello-functions-host`: the hosting seam the provider plugs into.

use log::SetLoggerError;
use thiserror::Error;

mod console_logger;
mod provider;

pub use console_logger::ConsoleLog;
pub use provider::ConsoleLoggerProvider;

#[derive(Debug, Error)]
pub enum LogConfigError {
    #[error("Failed to initialize console logger: {cause}")]
    ConsoleInit { cause: SetLoggerError },
}

/// Initializes the process-wide logging system with the specified log level.
///
/// You **must** only call this function once.
pub fn configure_logging(level: log::LevelFilter) -> Result<(), LogConfigError> {
    ConsoleLog::init(level).map_err(|e| LogConfigError::ConsoleInit { cause: e })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_configures_once_and_only_once() {
        assert!(configure_logging(log::LevelFilter::Info).is_ok());
        assert!(matches!(
            configure_logging(log::LevelFilter::Info),
            Err(LogConfigError::ConsoleInit { .. })
        ));
    }
}
