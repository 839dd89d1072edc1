use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Returns `None` when no article with the given id exists.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>>;
    /// Returns whether a row was removed. Comments go with it.
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Articles whose title contains `term` (case-insensitive), newest first.
    /// `None` lists everything.
    async fn search(&self, term: Option<&str>) -> DomainResult<Vec<Article>>;
}
