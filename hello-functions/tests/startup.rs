//! Startup configuration tests.

#![allow(clippy::unwrap_used)]

use hello_functions::{bootstrap, configure, hello};
use hello_functions_host::logging::SharedLoggerProvider;
use hello_functions_host::registry::ServiceRegistry;
use hello_functions_host::{WebRequest, invoke};

#[test]
fn configure_registers_a_logger_provider() {
    let mut services = ServiceRegistry::new();

    configure(&mut services);

    assert!(services.contains::<SharedLoggerProvider>());
    let provider = services.get::<SharedLoggerProvider>().unwrap();
    provider
        .create_logger("hello")
        .log(log::Level::Info, "startup smoke entry");
}

#[test]
fn invoke_greets_through_the_configured_registry() {
    let mut services = ServiceRegistry::new();
    configure(&mut services);
    let request = WebRequest::new().with_query_parameter("name", "Jane");

    let response = invoke(&services, "hello", request, hello).unwrap();

    assert_eq!(response.status(), 200);
    assert!(String::from_utf8_lossy(response.body()).contains("Hello, Jane"));
}

#[test]
fn bootstrap_installs_logging_and_registers_the_provider() {
    let services = bootstrap().unwrap();

    assert!(services.contains::<SharedLoggerProvider>());
    log::info!("facade smoke entry");
}
