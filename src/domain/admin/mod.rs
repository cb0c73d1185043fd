// src/domain/admin/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{AdminUser, NewAdmin};
pub use repository::AdminRepository;
pub use value_objects::{AdminId, Email, PasswordHash};
