//! Common hosting types

/// An alias for Result<T, Error> for convenience.
pub type FunctionResult<T> = std::result::Result<T, Error>;

/// An error during the hosting of a function invocation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The host was asked to run a function before startup configuration
    /// registered the collaborators it needs.
    #[error("Host configuration error: {0}")]
    ConfigurationError(String),
}
