// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    lookup,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// # Errors
    ///
    /// `NotFound` when no article has this id.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = lookup::article_id(command.id)?;

        if !self.write_repo.delete(id).await? {
            return Err(ApplicationError::not_found("article not found"));
        }

        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
