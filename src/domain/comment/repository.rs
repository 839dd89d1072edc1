use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    /// Fails with `DomainError::NotFound` when the referenced article is gone.
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    /// Comments of one article, oldest first.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
}
