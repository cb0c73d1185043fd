use crate::domain::admin::{AdminId, AdminRepository, AdminUser, Email, NewAdmin, PasswordHash};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteAdminRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAdminRepository {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    id: i64,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for AdminUser {
    type Error = DomainError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AdminId::new(row.id)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AdminRepository for SqliteAdminRepository {
    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM admins")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn insert(&self, admin: NewAdmin) -> DomainResult<AdminUser> {
        let row = sqlx::query_as::<_, AdminRow>(
            "INSERT INTO admins (email, password_hash, created_at) VALUES (?, ?, ?) \
             RETURNING id, email, password_hash, created_at",
        )
        .bind(admin.email.as_str())
        .bind(admin.password_hash.as_str())
        .bind(admin.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;
        AdminUser::try_from(row)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<AdminUser>> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, password_hash, created_at FROM admins WHERE email = ?",
        )
        .bind(email.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(AdminUser::try_from).transpose()
    }

    async fn find_by_id(&self, id: AdminId) -> DomainResult<Option<AdminUser>> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, password_hash, created_at FROM admins WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(AdminUser::try_from).transpose()
    }
}
