pub mod articles;
pub mod auth;
pub mod comments;
pub mod pagination;
pub mod serde_time;

pub use articles::{ArticleDetailDto, ArticleDto, DashboardDto, DashboardStats};
pub use auth::{AdminDto, AuthTokenDto, AuthenticatedAdmin, CurrentUserDto, LoginResultDto, TokenSubject};
pub use comments::CommentDto;
pub use pagination::CatalogPageDto;
