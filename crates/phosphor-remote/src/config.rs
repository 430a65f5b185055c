//! Endpoint connection settings.

use std::time::Duration;

/// Where to send commands and how long to wait.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointConfig {
    pub url: String,
    /// Upper bound on the whole request, connect included.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl EndpointConfig {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
            connect_timeout: timeout.min(Duration::from_secs(5)),
        }
    }
}
