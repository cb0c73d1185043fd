use crate::domain::article::{
    Article, ArticleBody, ArticleContent, ArticleId, ArticleReadRepository, ArticleSlug,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, AuthorName, CoverImage, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::error::{flag, map_sqlx};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, slug, content, summary, image, category, author, published, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn fetch_many(&self, filter: &str) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles {filter} ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Article::try_from).collect()
    }

    async fn fetch_by_slug(&self, slug: &ArticleSlug, published_only: bool) -> DomainResult<Option<Article>> {
        let sql = if published_only {
            format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ? AND published = 1")
        } else {
            format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ?")
        };
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Article::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    summary: String,
    image: String,
    category: String,
    author: String,
    published: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            body: ArticleBody::new(row.content)?,
            summary: row.summary,
            image: CoverImage::parse(&row.image),
            category: row.category,
            author: AuthorName::new(Some(&row.author)),
            published: row.published != 0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            content,
            created_at,
            updated_at,
        } = article;
        let ArticleContent {
            title,
            slug,
            body,
            summary,
            image,
            category,
            author,
            published,
        } = content;

        let sql = format!(
            "INSERT INTO articles (title, slug, content, summary, image, category, author, published, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(body.as_str())
            .bind(summary)
            .bind(image.as_str())
            .bind(category)
            .bind(author.as_str())
            .bind(flag(published))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            content,
            updated_at,
        } = update;
        let ArticleContent {
            title,
            slug,
            body,
            summary,
            image,
            category,
            author,
            published,
        } = content;

        let sql = format!(
            "UPDATE articles SET title = ?, slug = ?, content = ?, summary = ?, image = ?, category = ?, \
             author = ?, published = ?, updated_at = ? WHERE id = ? RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(body.as_str())
            .bind(summary)
            .bind(image.as_str())
            .bind(category)
            .bind(author.as_str())
            .bind(flag(published))
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found(format!("article {id}")))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("article {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn list_published(&self) -> DomainResult<Vec<Article>> {
        self.fetch_many("WHERE published = 1").await
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        self.fetch_many("").await
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.fetch_by_slug(slug, false).await
    }

    async fn find_published_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.fetch_by_slug(slug, true).await
    }
}
