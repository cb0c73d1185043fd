use crate::domain::admin::{AdminId, AdminUser};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    #[serde(with = "serde_time")]
    pub issued_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminDto {
    pub id: i64,
    pub email: String,
}

impl From<AdminUser> for AdminDto {
    fn from(admin: AdminUser) -> Self {
        Self {
            id: admin.id.into(),
            email: admin.email.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResultDto {
    pub token: AuthTokenDto,
    pub admin: AdminDto,
}

/// Identity behind a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub id: AdminId,
    pub email: String,
    pub session_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub admin_id: AdminId,
    pub email: String,
    pub session_id: String,
}

/// Answer to "who is signed in"; `signed_in` is false for absent or invalid tokens.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserDto {
    pub signed_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminDto>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "serde_time::option")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CurrentUserDto {
    pub const fn signed_out() -> Self {
        Self {
            signed_in: false,
            admin: None,
            expires_at: None,
        }
    }
}

impl From<&AuthenticatedAdmin> for CurrentUserDto {
    fn from(admin: &AuthenticatedAdmin) -> Self {
        Self {
            signed_in: true,
            admin: Some(AdminDto {
                id: admin.id.into(),
                email: admin.email.clone(),
            }),
            expires_at: Some(admin.expires_at),
        }
    }
}
