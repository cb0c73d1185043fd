// src/application/commands/comments/mod.rs
mod moderate;
mod service;
mod submit;

pub use service::CommentCommandService;
pub use submit::SubmitCommentCommand;
