// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::{Comment, NewComment};
pub use repository::CommentRepository;
pub use validation::{CommentDraft, CommentValidationError, MAX_COMMENT_LENGTH, ValidComment};
pub use value_objects::CommentId;
