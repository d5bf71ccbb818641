use crate::logging::{Logger, SharedLoggerProvider};
use crate::registry::ServiceRegistry;
use crate::{Error, FunctionResult, IntoWebResponse, WebRequest, WebResponse};

/// Runs one function invocation on behalf of the host.
///
/// Resolves the logger provider that startup configuration registered,
/// creates a logger scoped to `target`, and hands both the request and the
/// logger to the handler. The handler's return value is converted through
/// [IntoWebResponse].
///
/// Startup configuration is a precondition: if no provider was registered,
/// the invocation fails with a configuration error and the host should
/// treat its setup as broken rather than retry.
pub fn invoke<TResponse>(
    services: &ServiceRegistry,
    target: &str,
    request: WebRequest,
    handler: fn(request: WebRequest, logger: &dyn Logger) -> TResponse,
) -> FunctionResult<WebResponse>
where
    TResponse: IntoWebResponse,
{
    let provider = services.get::<SharedLoggerProvider>().ok_or_else(|| {
        Error::ConfigurationError("no logger provider registered at startup".to_string())
    })?;
    let logger = provider.create_logger(target);
    Ok(handler(request, logger.as_ref()).response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingLogger {
        entries: Arc<AtomicUsize>,
    }

    impl Logger for CountingLogger {
        fn log(&self, _level: log::Level, _message: &str) {
            self.entries.fetch_add(1, Ordering::Relaxed);
        }
    }

    struct CountingProvider {
        entries: Arc<AtomicUsize>,
    }

    impl crate::logging::LoggerProvider for CountingProvider {
        fn create_logger(&self, _target: &str) -> Arc<dyn Logger> {
            Arc::new(CountingLogger {
                entries: self.entries.clone(),
            })
        }
    }

    fn ping(_request: WebRequest, logger: &dyn Logger) -> &'static str {
        logger.log(log::Level::Info, "ping");
        "pong"
    }

    #[test]
    fn invoke_wires_the_registered_provider_to_the_handler() {
        let entries = Arc::new(AtomicUsize::new(0));
        let mut services = ServiceRegistry::new();
        services.register_singleton::<SharedLoggerProvider>(Arc::new(CountingProvider {
            entries: entries.clone(),
        }));

        let response = invoke(&services, "ping", WebRequest::new(), ping).unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), b"pong");
        assert_eq!(entries.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn invoke_without_startup_configuration_is_an_error() {
        let services = ServiceRegistry::new();
        let result = invoke(&services, "ping", WebRequest::new(), ping);
        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }
}
