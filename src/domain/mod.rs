// src/domain/mod.rs
pub mod admin;
pub mod article;
pub mod comment;
pub mod errors;
pub mod richtext;
