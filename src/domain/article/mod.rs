// src/domain/article/mod.rs
pub mod category;
pub mod entity;
pub mod listing;
pub mod related;
pub mod repository;
pub mod slug;
pub mod value_objects;

pub use category::{CATEGORIES, is_known_category, normalize_category};
pub use entity::{Article, ArticleContent, ArticleUpdate, NewArticle};
pub use listing::{CatalogQuery, CatalogPage, paginate};
pub use related::{DEFAULT_RELATED_LIMIT, related};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use slug::derive_slug;
pub use value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleTitle, AuthorName, CoverImage, DEFAULT_AUTHOR,
};
