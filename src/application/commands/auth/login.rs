// src/application/commands/auth/login.rs
use super::AuthService;
use crate::{
    application::{
        dto::{LoginResultDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::admin::Email,
};
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

const INVALID_CREDENTIALS: &str = "invalid credentials";

impl AuthService {
    /// Exchange email and password for a bearer token bound to a fresh session.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResultDto> {
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;
        let Some(admin) = self.admin_repo.find_by_email(&email).await? else {
            warn!(email = %email, "login for unknown admin");
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        };

        self.password_hasher
            .verify(&command.password, admin.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    warn!(email = %email, "login with wrong password");
                    ApplicationError::unauthorized(INVALID_CREDENTIALS)
                }
                other => other,
            })?;

        let subject = TokenSubject {
            admin_id: admin.id,
            email: admin.email.as_str().to_string(),
            session_id: Uuid::new_v4().to_string(),
        };
        let token = self.token_manager.issue(subject).await?;

        info!(admin_id = %admin.id, session_id = %token.session_id, "admin signed in");
        Ok(LoginResultDto {
            token,
            admin: admin.into(),
        })
    }
}
