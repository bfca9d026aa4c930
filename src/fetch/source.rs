use std::fmt;

use async_trait::async_trait;

use crate::core::menu::RemoteConfig;

/// Errors that can occur while loading the remote configuration.
/// Every variant is terminal for the session: there is no retry path.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, broken transfer).
    Network(String),
    /// The endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// The body arrived but did not parse as a remote configuration.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// A source of the remote configuration.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches and parses the configuration. Called exactly once per
    /// session.
    async fn fetch(&self) -> Result<RemoteConfig, FetchError>;
}
