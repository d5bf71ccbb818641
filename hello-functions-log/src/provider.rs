use std::sync::Arc;

use hello_functions_host::logging::{Logger, LoggerProvider};

use crate::console_logger::ConsoleLog;

/// Adapts a [ConsoleLog] backend to the host's logger-provider capability.
///
/// Startup code registers one provider as a singleton; every logger it
/// creates shares the same backend for the life of the process.
pub struct ConsoleLoggerProvider {
    backend: Arc<ConsoleLog>,
}

impl ConsoleLoggerProvider {
    /// Wraps the given backend.
    pub fn new(backend: Arc<ConsoleLog>) -> Self {
        Self { backend }
    }
}

impl LoggerProvider for ConsoleLoggerProvider {
    fn create_logger(&self, target: &str) -> Arc<dyn Logger> {
        Arc::new(ScopedConsoleLogger {
            backend: self.backend.clone(),
            target: target.to_string(),
        })
    }
}

struct ScopedConsoleLogger {
    backend: Arc<ConsoleLog>,
    target: String,
}

impl Logger for ScopedConsoleLogger {
    fn log(&self, level: log::Level, message: &str) {
        self.backend.emit(level, &self.target, message);
    }
}
