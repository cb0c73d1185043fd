// src/application/ports/media.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait ImageEncoder: Send + Sync {
    /// Turn an uploaded file into an embeddable `data:` URI.
    async fn encode(&self, filename: &str, bytes: Vec<u8>) -> ApplicationResult<String>;
}
