// src/infrastructure/security/session_store.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::session_revocation::SessionRevocationStore,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// Revoked session ids, kept for the lifetime of the process.
#[derive(Default)]
pub struct InMemorySessionRevocationStore {
    revoked: Mutex<HashSet<String>>,
}

impl InMemorySessionRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> ApplicationError {
    ApplicationError::infrastructure("session store lock poisoned")
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        let guard = self.revoked.lock().map_err(|_| poisoned())?;
        Ok(guard.contains(session_id))
    }

    async fn revoke(&self, session_id: &str) -> ApplicationResult<()> {
        let mut guard = self.revoked.lock().map_err(|_| poisoned())?;
        guard.insert(session_id.to_string());
        Ok(())
    }
}
