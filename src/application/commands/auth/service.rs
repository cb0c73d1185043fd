// src/application/commands/auth/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{
        security::{PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
        time::Clock,
    },
    domain::admin::AdminRepository,
};

pub struct AuthService {
    pub(super) admin_repo: Arc<dyn AdminRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) session_store: Arc<dyn SessionRevocationStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AuthService {
    pub fn new(
        admin_repo: Arc<dyn AdminRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        session_store: Arc<dyn SessionRevocationStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            admin_repo,
            password_hasher,
            token_manager,
            session_store,
            clock,
        }
    }
}
