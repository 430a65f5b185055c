//! Command requests on a background tokio runtime.
//!
//! The frame loop never awaits: each submission is spawned onto the
//! runtime and its result comes back as a [`CommandEvent`] drained on the
//! next tick.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use phosphor_remote::{CommandEndpoint, EndpointConfig, HttpEndpoint, RemoteError};
use phosphor_terminal::SubmittedCommand;

use super::core::PhosphorApp;
use super::types::CommandEvent;

/// Send one command and report the outcome, whatever it is.
pub(super) async fn run_command(
    endpoint: Arc<dyn CommandEndpoint>,
    submitted: SubmittedCommand,
    event_tx: Sender<CommandEvent>,
) {
    let outcome = endpoint.submit(&submitted.command).await;
    let _ = event_tx.send(CommandEvent::Resolved {
        id: submitted.id,
        command: submitted.command,
        outcome,
    });
}

impl PhosphorApp {
    /// Create the runtime and the endpoint client.
    pub(super) fn start_command_runtime(&mut self) {
        if self.runtime.is_none() {
            match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
            {
                Ok(rt) => self.runtime = Some(rt),
                Err(e) => {
                    tracing::error!("Failed to create tokio runtime: {e}");
                    return;
                }
            }
        }
        self.rebuild_endpoint();
    }

    /// Rebuild the endpoint client from `api.*`.
    pub(super) fn rebuild_endpoint(&mut self) {
        let api = &self.store.config().api;
        let config = EndpointConfig::new(
            api.endpoint.clone(),
            Duration::from_millis(u64::from(api.timeout_ms)),
        );
        match HttpEndpoint::new(config) {
            Ok(endpoint) => {
                tracing::info!(url = endpoint.url(), "Command endpoint ready");
                self.endpoint = Some(Arc::new(endpoint));
            }
            Err(e) => {
                tracing::warn!("Command endpoint unavailable: {e}");
                self.endpoint = None;
            }
        }
    }

    /// Spawn the request for a submitted command.
    ///
    /// Without a runtime or endpoint the command fails at once and takes
    /// the fallback path.
    pub(super) fn dispatch_command(&mut self, submitted: SubmittedCommand) {
        match (self.runtime.as_ref(), self.endpoint.as_ref()) {
            (Some(rt), Some(endpoint)) => {
                rt.spawn(run_command(
                    Arc::clone(endpoint),
                    submitted,
                    self.command_tx.clone(),
                ));
            }
            _ => {
                let error = RemoteError::Client("command runtime not running".into());
                self.terminal.apply_reply(submitted.id, Err(error));
            }
        }
    }

    /// Apply every reply that arrived since the last tick.
    pub(super) fn poll_commands(&mut self) -> bool {
        let mut applied = false;
        while let Ok(event) = self.command_rx.try_recv() {
            match event {
                CommandEvent::Resolved {
                    id,
                    command,
                    outcome,
                } => {
                    tracing::debug!(id, command = %command, ok = outcome.is_ok(), "Command resolved");
                    applied |= self.terminal.apply_reply(id, outcome);
                }
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use phosphor_remote::CommandReply;

    struct ScriptedEndpoint {
        reply: Option<String>,
    }

    #[async_trait]
    impl CommandEndpoint for ScriptedEndpoint {
        async fn submit(&self, command: &str) -> Result<CommandReply, RemoteError> {
            match &self.reply {
                Some(message) => Ok(CommandReply {
                    message: Some(format!("{message} {command}")),
                }),
                None => Err(RemoteError::Timeout),
            }
        }
    }

    fn submitted(id: u64, command: &str) -> SubmittedCommand {
        SubmittedCommand {
            id,
            command: command.to_string(),
        }
    }

    #[tokio::test]
    async fn reply_is_sent_with_request_id() {
        let (tx, rx) = std::sync::mpsc::channel();
        let endpoint: Arc<dyn CommandEndpoint> = Arc::new(ScriptedEndpoint {
            reply: Some("hello".into()),
        });
        run_command(endpoint, submitted(7, "giad"), tx).await;

        let CommandEvent::Resolved {
            id,
            command,
            outcome,
        } = rx.try_recv().unwrap();
        assert_eq!(id, 7);
        assert_eq!(command, "giad");
        assert_eq!(outcome.unwrap().message.as_deref(), Some("hello giad"));
    }

    #[tokio::test]
    async fn failure_is_reported_not_dropped() {
        let (tx, rx) = std::sync::mpsc::channel();
        let endpoint: Arc<dyn CommandEndpoint> = Arc::new(ScriptedEndpoint { reply: None });
        run_command(endpoint, submitted(3, "god"), tx).await;

        let CommandEvent::Resolved { id, outcome, .. } = rx.try_recv().unwrap();
        assert_eq!(id, 3);
        assert!(matches!(outcome, Err(RemoteError::Timeout)));
    }
}
