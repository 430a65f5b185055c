//! Remote command endpoint for the phosphor prompt.
//!
//! The endpoint is an opaque request/response boundary: one POST per
//! submitted command, answered with an optional message. Everything else
//! (spinners, fallbacks, sequencing) lives in `phosphor-terminal`.

pub mod config;
pub mod http;

use async_trait::async_trait;

pub use config::EndpointConfig;
pub use http::HttpEndpoint;

#[async_trait]
pub trait CommandEndpoint: Send + Sync {
    /// Send one normalized command and wait for the reply.
    async fn submit(&self, command: &str) -> Result<CommandReply, RemoteError>;
}

/// Request body: `{"userInput": "<command>"}`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    pub user_input: String,
}

/// Response body: `{"message": "..."}`, where the message may be absent.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CommandReply {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("HTTP client error: {0}")]
    Client(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("HTTP {status}")]
    Status { status: u16 },
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RemoteError::Timeout
        } else if e.is_decode() {
            RemoteError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            RemoteError::Status {
                status: status.as_u16(),
            }
        } else {
            RemoteError::Network(e.to_string())
        }
    }
}
