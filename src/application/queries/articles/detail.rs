use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailDto, ArticleDto},
        error::{ApplicationError, ApplicationResult},
        sharing::{ShareLinks, canonical_url},
    },
    domain::article::{ArticleSlug, related},
};

impl ArticleQueryService {
    /// Published article by slug together with up to `related_limit` articles
    /// of the same category.
    pub async fn detail_by_slug(&self, slug: &str) -> ApplicationResult<ArticleDetailDto> {
        let slug = ArticleSlug::new(slug).map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_published_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let published = self.read_repo.list_published().await?;
        let related = related(&published, &article, self.related_limit)
            .into_iter()
            .map(ArticleDto::from)
            .collect();

        Ok(ArticleDetailDto {
            article: article.into(),
            related,
        })
    }

    pub async fn share_links(&self, slug: &str) -> ApplicationResult<ShareLinks> {
        let slug = ArticleSlug::new(slug).map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_published_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let url = canonical_url(&self.public_base_url, article.slug.as_str());
        Ok(ShareLinks::build(article.title.as_str(), &url, &article.summary))
    }
}
