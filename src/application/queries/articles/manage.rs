use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedAdmin, DashboardDto, DashboardStats},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};
use tracing::debug;

impl ArticleQueryService {
    /// Every article, drafts included, newest first, with dashboard counts.
    pub async fn dashboard(&self, actor: &AuthenticatedAdmin) -> ApplicationResult<DashboardDto> {
        let articles = self.read_repo.list_all().await?;
        let stats = DashboardStats::from_articles(&articles);
        debug!(admin = %actor.email, total = stats.total, "dashboard listed");
        Ok(DashboardDto {
            stats,
            articles: articles.into_iter().map(ArticleDto::from).collect(),
        })
    }

    pub async fn get_for_edit(&self, _actor: &AuthenticatedAdmin, id: i64) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(ArticleDto::from)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
