// src/application/ports/share.rs
use crate::application::sharing::SharePayload;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The user dismissed the channel; no further channel is tried.
    Aborted,
    /// The channel does not exist on this client.
    Unavailable,
    Failed(String),
}

#[async_trait]
pub trait ShareChannel: Send + Sync {
    fn name(&self) -> &'static str;
    async fn share(&self, payload: &SharePayload) -> ShareOutcome;
}
