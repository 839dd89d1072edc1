use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentContent, CommentId, CommentTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub title: CommentTitle,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    #[must_use]
    pub fn belongs_to(&self, article_id: ArticleId) -> bool {
        self.article_id == article_id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub title: CommentTitle,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}
