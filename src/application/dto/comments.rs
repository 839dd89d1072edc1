use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            title: comment.title.into_inner(),
            content: comment.content.into_inner(),
            date: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentListDto {
    pub comments: Vec<CommentDto>,
}

impl FromIterator<Comment> for CommentListDto {
    fn from_iter<I: IntoIterator<Item = Comment>>(iter: I) -> Self {
        Self {
            comments: iter.into_iter().map(Into::into).collect(),
        }
    }
}
