//! reqwest-backed command endpoint.

use async_trait::async_trait;
use tracing::debug;

use crate::{CommandEndpoint, CommandReply, CommandRequest, EndpointConfig, RemoteError};

/// Posts commands as JSON to a fixed URL.
pub struct HttpEndpoint {
    config: EndpointConfig,
    http: reqwest::Client,
}

impl HttpEndpoint {
    pub fn new(config: EndpointConfig) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::Client(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl CommandEndpoint for HttpEndpoint {
    async fn submit(&self, command: &str) -> Result<CommandReply, RemoteError> {
        let body = CommandRequest {
            user_input: command.to_string(),
        };

        debug!(url = %self.config.url, command, "command request");

        let response = self
            .http
            .post(&self.config.url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;

        Ok(CommandReply {
            message: json["message"].as_str().map(String::from),
        })
    }
}
