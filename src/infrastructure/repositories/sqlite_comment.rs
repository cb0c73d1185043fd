use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::error::{flag, map_sqlx};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const COMMENT_COLUMNS: &str =
    "id, article_id, author_name, author_email, content, is_approved, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentRepository {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: String,
    article_id: i64,
    author_name: String,
    author_email: Option<String>,
    content: String,
    is_approved: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::parse(&row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author_name: row.author_name,
            author_email: row.author_email,
            content: row.content,
            is_approved: row.is_approved != 0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn collect(rows: Vec<CommentRow>) -> DomainResult<Vec<Comment>> {
    rows.into_iter().map(Comment::try_from).collect()
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn list_by_article(
        &self,
        article_id: ArticleId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE article_id = "));
        builder.push_bind(i64::from(article_id));
        if approved_only {
            builder.push(" AND is_approved = 1");
        }
        builder.push(" ORDER BY created_at ASC, rowid ASC");

        let rows = builder
            .build_query_as::<CommentRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        collect(rows)
    }

    async fn list_all(&self, article_id: Option<ArticleId>) -> DomainResult<Vec<Comment>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COMMENT_COLUMNS} FROM comments"));
        if let Some(article_id) = article_id {
            builder.push(" WHERE article_id = ");
            builder.push_bind(i64::from(article_id));
        }
        builder.push(" ORDER BY created_at DESC, rowid DESC");

        let rows = builder
            .build_query_as::<CommentRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        collect(rows)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Comment::try_from).transpose()
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            id,
            article_id,
            author_name,
            author_email,
            content,
            is_approved,
            created_at,
            updated_at,
        } = comment;

        let sql = format!(
            "INSERT INTO comments ({COMMENT_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(id.to_string())
            .bind(i64::from(article_id))
            .bind(author_name)
            .bind(author_email)
            .bind(content)
            .bind(flag(is_approved))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Comment::try_from(row)
    }

    async fn set_approval(
        &self,
        id: CommentId,
        approved: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Comment> {
        let sql = format!(
            "UPDATE comments SET is_approved = ?, updated_at = ? WHERE id = ? RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(flag(approved))
            .bind(updated_at)
            .bind(id.to_string())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found(format!("comment {id}")))?;
        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id.to_string())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("comment {id}")));
        }
        Ok(())
    }
}
