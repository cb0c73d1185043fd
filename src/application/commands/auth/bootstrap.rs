// src/application/commands/auth/bootstrap.rs
use super::AuthService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::admin::{Email, NewAdmin, PasswordHash},
};
use tracing::info;

impl AuthService {
    /// Create the first admin account. Does nothing once any admin exists.
    /// Returns whether an account was created.
    pub async fn bootstrap_admin(&self, email: &str, password: &str) -> ApplicationResult<bool> {
        if self.admin_repo.count().await? > 0 {
            return Ok(false);
        }
        if password.is_empty() {
            return Err(ApplicationError::validation("admin password cannot be empty"));
        }

        let email = Email::new(email)?;
        let hash = self.password_hasher.hash(password).await?;
        let admin = self
            .admin_repo
            .insert(NewAdmin {
                email,
                password_hash: PasswordHash::new(hash)?,
                created_at: self.clock.now(),
            })
            .await?;

        info!(admin_id = %admin.id, email = %admin.email, "bootstrap admin created");
        Ok(true)
    }
}
