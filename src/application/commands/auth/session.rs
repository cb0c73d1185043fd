// src/application/commands/auth/session.rs
use super::AuthService;
use crate::application::{
    dto::{AuthenticatedAdmin, CurrentUserDto},
    error::{ApplicationError, ApplicationResult},
};
use tracing::{debug, info};

impl AuthService {
    /// Verify a bearer token and reject revoked sessions.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAdmin> {
        let admin = self.token_manager.authenticate(token).await?;
        if self.session_store.is_revoked(&admin.session_id).await? {
            return Err(ApplicationError::unauthorized("session revoked"));
        }
        Ok(admin)
    }

    /// Who is signed in. Missing, invalid and revoked tokens all read as signed out.
    pub async fn current_user(&self, token: Option<&str>) -> ApplicationResult<CurrentUserDto> {
        let Some(token) = token else {
            return Ok(CurrentUserDto::signed_out());
        };
        match self.authenticate(token).await {
            Ok(admin) => Ok(CurrentUserDto::from(&admin)),
            Err(ApplicationError::Unauthorized(reason)) => {
                debug!(%reason, "token rejected while resolving current user");
                Ok(CurrentUserDto::signed_out())
            }
            Err(other) => Err(other),
        }
    }

    pub async fn logout(&self, admin: &AuthenticatedAdmin) -> ApplicationResult<()> {
        self.session_store.revoke(&admin.session_id).await?;
        info!(admin_id = %admin.id, session_id = %admin.session_id, "admin signed out");
        Ok(())
    }
}
