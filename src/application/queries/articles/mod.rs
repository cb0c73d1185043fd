mod catalog;
mod detail;
mod manage;
mod service;

pub use catalog::CatalogRequest;
pub use service::ArticleQueryService;
