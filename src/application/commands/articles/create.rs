// src/application/commands/articles/create.rs
use super::{ArticleCommandService, service::validate_article_fields};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::NewArticle,
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    /// # Errors
    ///
    /// `InvalidFields` for a bad title or content; repository failures pass
    /// through.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let (title, content) = validate_article_fields(command.title, command.content)?;

        let new_article = NewArticle {
            title,
            content,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
