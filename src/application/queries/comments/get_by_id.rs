use super::CommentQueryService;
use crate::application::{
    dto::CommentDto,
    error::{ApplicationError, ApplicationResult},
    lookup,
};

pub struct GetCommentQuery {
    pub article_id: i64,
    pub id: i64,
}

impl CommentQueryService {
    /// A comment reached through the wrong article is reported as missing.
    ///
    /// # Errors
    ///
    /// `NotFound` when the article or the comment does not exist.
    pub async fn get_comment(&self, query: GetCommentQuery) -> ApplicationResult<CommentDto> {
        let article = self
            .require_article(lookup::article_id(query.article_id)?)
            .await?;
        let id = lookup::comment_id(query.id)?;

        let comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|comment| comment.belongs_to(article.id))
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        Ok(comment.into())
    }
}
