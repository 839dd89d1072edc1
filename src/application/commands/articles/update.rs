use super::{ArticleCommandService, service::validate_article_fields};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        lookup,
    },
    domain::article::ArticleUpdate,
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    /// Fields are checked before the article is looked up.
    ///
    /// # Errors
    ///
    /// `InvalidFields` for a bad body, `NotFound` when the article is absent.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let (title, content) = validate_article_fields(command.title, command.content)?;
        let id = lookup::article_id(command.id)?;

        let updated = self
            .write_repo
            .update(ArticleUpdate { id, title, content })
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        tracing::debug!(article_id = %id, "article updated");
        Ok(updated.into())
    }
}
