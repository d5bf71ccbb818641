use std::sync::Arc;

use hello_functions_host::logging::SharedLoggerProvider;
use hello_functions_host::registry::ServiceRegistry;
use hello_functions_log::{ConsoleLog, ConsoleLoggerProvider, LogConfigError};
use log::LevelFilter;

/// Registers process-wide collaborators into the host's service registry.
///
/// The host calls this once at startup, before any request is handled. The
/// console backend writes formatted, timestamp-enriched lines to standard
/// output; the provider adapter is registered as the singleton the host
/// creates per-invocation loggers from.
pub fn configure(services: &mut ServiceRegistry) {
    let backend = Arc::new(ConsoleLog::new(LevelFilter::Info));
    let provider: SharedLoggerProvider = Arc::new(ConsoleLoggerProvider::new(backend));
    services.register_singleton::<SharedLoggerProvider>(provider);
}

/// One-shot process startup.
///
/// Installs the console backend behind the process-wide `log` facade, then
/// runs [configure] on a fresh registry. A configuration failure propagates
/// to the host, which must abort startup: a function without its logger is
/// not allowed to serve requests.
pub fn bootstrap() -> Result<ServiceRegistry, LogConfigError> {
    hello_functions_log::configure_logging(LevelFilter::Info)?;
    let mut services = ServiceRegistry::new();
    configure(&mut services);
    Ok(services)
}
