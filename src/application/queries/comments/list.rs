use super::CommentQueryService;
use crate::application::{dto::CommentListDto, error::ApplicationResult, lookup};

pub struct ListCommentsQuery {
    pub article_id: i64,
}

impl CommentQueryService {
    /// # Errors
    ///
    /// `NotFound` when the article does not exist.
    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<CommentListDto> {
        let article = self
            .require_article(lookup::article_id(query.article_id)?)
            .await?;

        let comments = self.read_repo.list_by_article(article.id).await?;
        Ok(comments.into_iter().collect())
    }
}
