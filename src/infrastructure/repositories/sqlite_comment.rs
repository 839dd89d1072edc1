use super::error::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentReadRepository, CommentTitle,
    CommentWriteRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteCommentWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentWriteRepository {
    #[must_use]
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteCommentReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentReadRepository {
    #[must_use]
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            title: CommentTitle::new(row.title)?,
            content: CommentContent::new(row.content)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentWriteRepository for SqliteCommentWriteRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            title,
            content,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, title, content, created_at) VALUES (?, ?, ?, ?) RETURNING id, article_id, title, content, created_at",
        )
        .bind(i64::from(article_id))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(|err| match map_sqlx(err) {
            DomainError::NotFound(_) => DomainError::NotFound("article not found".into()),
            other => other,
        })?;

        Comment::try_from(row)
    }
}

#[async_trait]
impl CommentReadRepository for SqliteCommentReadRepository {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, title, content, created_at FROM comments WHERE article_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Comment::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, title, content, created_at FROM comments WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }
}
