use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{article::ArticleId, comment::CommentId};

// Non-positive identifiers can never match a stored row.
pub fn article_id(raw: i64) -> ApplicationResult<ArticleId> {
    ArticleId::new(raw).map_err(|_| ApplicationError::not_found("article not found"))
}

pub fn comment_id(raw: i64) -> ApplicationResult<CommentId> {
    CommentId::new(raw).map_err(|_| ApplicationError::not_found("comment not found"))
}
