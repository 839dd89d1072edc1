// tests/support/mocks/failing.rs
use async_trait::async_trait;
use crossblog::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crossblog::domain::errors::{DomainError, DomainResult};

fn broken<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("database is locked: /var/lib/blog.db".into()))
}

/// Every call fails the way a lost database connection would.
pub struct FailingArticleRepo;

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        broken()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Option<Article>> {
        broken()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<bool> {
        broken()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        broken()
    }

    async fn search(&self, _term: Option<&str>) -> DomainResult<Vec<Article>> {
        broken()
    }
}

/// Panics inside the handler to exercise the catch-panic layer.
pub struct PanickingArticleRead;

#[async_trait]
impl ArticleReadRepository for PanickingArticleRead {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        panic!("find_by_id exploded")
    }

    async fn search(&self, _term: Option<&str>) -> DomainResult<Vec<Article>> {
        panic!("search exploded")
    }
}
