//! An HTTP-triggered greeting function
//!
//! The host invokes [hello] once per inbound request with the request and a
//! logger; [configure] is the startup routine that registers the console
//! logging provider the host injects from, and [bootstrap] is the one-shot
//! process entry that also installs the `log` facade backend.
//!
//! You are likely to be interested in the sibling crates:
//! * `hello-functions-host`: the hosting seam (requests, responses, registry).
//! * `hello-functions-log`: the console `log` backend and provider adapter.

mod hello;
mod startup;

pub use hello::hello;
pub use startup::{bootstrap, configure};
