#![deny(missing_docs)]

//! Hosting seam for hello Functions
//!
//! This crate holds the types shared between the function host and the
//! functions it invokes: the HTTP request and response values handed across
//! the boundary, the service registry that startup code populates, the
//! logging capabilities, and the invocation plumbing that ties them
//! together.
//!
//! You are likely to be interested in the sibling crates:
//! * `hello-functions`: the functions themselves, plus their startup routine.
//! * `hello-functions-log`: the console `log` backend and provider adapter.

pub mod encoding;
mod error;
mod into_web_response;
mod invoke;
pub mod logging;
pub mod registry;
mod request;
mod response;

pub use error::{Error, FunctionResult};
pub use into_web_response::IntoWebResponse;
pub use invoke::invoke;
pub use request::WebRequest;
pub use response::WebResponse;
