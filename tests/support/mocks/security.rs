// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use publartz_core::application::{
    ApplicationResult, dto::AuthenticatedAdmin, error::ApplicationError,
    ports::security::PasswordHasher,
};
use publartz_core::domain::admin::AdminId;

/// Ed25519 root key used by every HTTP test router.
pub const TEST_KEY: &str = "8f0e5a3c2b1d4f6e7a9c0b2d4e6f8a1c3e5b7d9f0a2c4e6b8d0f1a3c5e7b9d2f";

/// Deterministic hasher; Argon2 is exercised by its own unit tests.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("bad password"))
        }
    }
}

/// An already-verified admin, for calling services directly.
pub fn admin_identity() -> AuthenticatedAdmin {
    let now = super::time::fixed_now();
    AuthenticatedAdmin {
        id: AdminId::new(1).expect("invalid admin id"),
        email: "admin@publartz.id".into(),
        session_id: "test-session".into(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}
