// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod draft;
mod service;
mod update;

pub use draft::ArticleDraft;
pub use service::ArticleCommandService;
