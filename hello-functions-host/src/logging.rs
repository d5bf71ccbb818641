//! Logging capabilities shared between the host and functions

use std::sync::Arc;

/// The logging capability handed to a function for one invocation.
///
/// Functions log through this interface rather than a process-wide facade,
/// so tests can hand in a recording implementation and observe entries
/// deterministically.
pub trait Logger: Send + Sync {
    /// Emits one log entry at the given severity.
    fn log(&self, level: log::Level, message: &str);
}

/// Creates [Logger]s on behalf of the host.
///
/// Startup code registers one provider in the
/// [ServiceRegistry](crate::registry::ServiceRegistry); the host asks it for
/// a logger scoped to each invocation target. Implementations must be safe
/// to share across concurrent invocations.
pub trait LoggerProvider: Send + Sync {
    /// Creates a logger scoped to the given target.
    fn create_logger(&self, target: &str) -> Arc<dyn Logger>;
}

/// How a logger provider is registered into, and resolved from, the service
/// registry.
pub type SharedLoggerProvider = Arc<dyn LoggerProvider>;
