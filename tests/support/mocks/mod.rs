// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod security;
pub mod time;

pub use repos::{InMemoryArticleRepo, InMemoryCommentRepo, InMemoryPreferenceStore};
pub use security::{StrictPasswordHasher, TEST_KEY, admin_identity};
pub use time::{FixedClock, fixed_now};
