use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{Article, ArticleId, ArticleReadRepository},
        comment::CommentReadRepository,
    },
};

pub struct CommentQueryService {
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
}

impl CommentQueryService {
    #[must_use]
    pub const fn new(
        read_repo: Arc<dyn CommentReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            article_repo,
        }
    }

    pub(super) async fn require_article(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.article_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
