use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
        lookup,
    },
    domain::comment::{CommentContent, CommentTitle, NewComment},
};

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub title: String,
    pub content: String,
}

impl CommentCommandService {
    /// Fields are validated before the article is looked up, so an invalid
    /// body is rejected even when the article does not exist.
    ///
    /// # Errors
    ///
    /// `InvalidFields` for a bad body, then `NotFound` for a missing article.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let mut errors = FieldErrors::new();
        let title = errors.capture("title", CommentTitle::new(command.title));
        let content = errors.capture("content", CommentContent::new(command.content));
        let (Some(title), Some(content)) = (title, content) else {
            return Err(errors.into());
        };

        let article_id = lookup::article_id(command.article_id)?;
        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let created = self
            .write_repo
            .insert(NewComment {
                article_id: article.id,
                title,
                content,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(
            article_id = %article.id,
            comment_id = i64::from(created.id),
            "comment created"
        );
        Ok(created.into())
    }
}
