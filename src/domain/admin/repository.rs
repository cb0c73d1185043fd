// src/domain/admin/repository.rs
use crate::domain::admin::entity::{AdminUser, NewAdmin};
use crate::domain::admin::value_objects::{AdminId, Email};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, admin: NewAdmin) -> DomainResult<AdminUser>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<AdminUser>>;

    async fn find_by_id(&self, id: AdminId) -> DomainResult<Option<AdminUser>>;
}
