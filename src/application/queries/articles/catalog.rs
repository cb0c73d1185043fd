use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, CatalogPageDto},
        error::ApplicationResult,
    },
    domain::article::{CATEGORIES, CatalogQuery, paginate},
};

#[derive(Debug, Clone, Default)]
pub struct CatalogRequest {
    pub term: Option<String>,
    pub category: Option<String>,
    pub page: Option<u32>,
}

impl ArticleQueryService {
    /// Published articles filtered by free text and category, one page at a time.
    pub async fn catalog(&self, request: CatalogRequest) -> ApplicationResult<CatalogPageDto<ArticleDto>> {
        let published = self.read_repo.list_published().await?;
        let query = CatalogQuery::new(
            request.term.unwrap_or_default(),
            request.category.unwrap_or_default(),
            request.page.unwrap_or(1),
            self.page_size,
        );
        Ok(paginate(&published, &query).map(ArticleDto::from).into())
    }

    pub fn categories(&self) -> Vec<String> {
        CATEGORIES.iter().map(ToString::to_string).collect()
    }
}
