// src/domain/admin/entity.rs
use crate::domain::admin::value_objects::{AdminId, Email, PasswordHash};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: AdminId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}
