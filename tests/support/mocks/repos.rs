// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use publartz_core::application::{
    ApplicationResult, ports::preferences::PreferenceStore, theme::Theme,
};
use publartz_core::domain::{
    article::{
        Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
        ArticleWriteRepository, NewArticle,
    },
    comment::{Comment, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
};
use std::sync::Mutex;

/* -------------------------------- 記事リポジトリ -------------------------------- */

/// Vec-backed article store implementing both repository halves.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryArticleRepo {
    pub fn with(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
        }
    }

    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }

    fn sorted(&self, published_only: bool) -> Vec<Article> {
        let mut items: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| !published_only || a.published)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        items
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if articles.iter().any(|a| a.slug == article.content.slug) {
            return Err(DomainError::Conflict("slug".into()));
        }
        let id = articles.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
        let content = article.content;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: content.title,
            slug: content.slug,
            body: content.body,
            summary: content.summary,
            image: content.image,
            category: content.category,
            author: content.author,
            published: content.published,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::not_found("article"))?;
        article.apply(update.content, update.updated_at);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(DomainError::not_found("article"));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn list_published(&self) -> DomainResult<Vec<Article>> {
        Ok(self.sorted(true))
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.sorted(false))
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.slug == slug)
            .cloned())
    }

    async fn find_published_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .find_by_slug(slug)
            .await?
            .filter(|article| article.published))
    }
}

/* -------------------------------- コメントリポジトリ -------------------------------- */

#[derive(Default)]
pub struct InMemoryCommentRepo {
    comments: Mutex<Vec<Comment>>,
    /// When set, every write fails with a persistence error.
    pub fail_writes: bool,
}

impl InMemoryCommentRepo {
    pub fn failing() -> Self {
        Self {
            comments: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub fn len(&self) -> usize {
        self.comments.lock().unwrap().len()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn list_by_article(
        &self,
        article_id: ArticleId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.article_id == article_id && (!approved_only || c.is_approved))
            .cloned()
            .collect())
    }

    async fn list_all(&self, article_id: Option<ArticleId>) -> DomainResult<Vec<Comment>> {
        let mut items: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| article_id.is_none_or(|id| c.article_id == id))
            .cloned()
            .collect();
        items.reverse();
        Ok(items)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.comments.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        if self.fail_writes {
            return Err(DomainError::Persistence("database is locked".into()));
        }
        let stored = Comment {
            id: comment.id,
            article_id: comment.article_id,
            author_name: comment.author_name,
            author_email: comment.author_email,
            content: comment.content,
            is_approved: comment.is_approved,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        };
        self.comments.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn set_approval(
        &self,
        id: CommentId,
        approved: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Comment> {
        let mut comments = self.comments.lock().unwrap();
        let comment = comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("comment"))?;
        comment.is_approved = approved;
        comment.updated_at = updated_at;
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        self.comments.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

/* -------------------------------- 設定ストア -------------------------------- */

#[derive(Default)]
pub struct InMemoryPreferenceStore {
    theme: Mutex<Option<Theme>>,
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn load_theme(&self) -> ApplicationResult<Option<Theme>> {
        Ok(*self.theme.lock().unwrap())
    }

    async fn save_theme(&self, theme: Theme) -> ApplicationResult<()> {
        *self.theme.lock().unwrap() = Some(theme);
        Ok(())
    }
}
