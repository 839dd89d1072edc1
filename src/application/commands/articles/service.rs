// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationResult, FieldErrors},
        ports::time::Clock,
    },
    domain::article::{ArticleContent, ArticleTitle, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    #[must_use]
    pub const fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { write_repo, clock }
    }
}

/// Check title and content together so the caller sees every failing field.
pub(super) fn validate_article_fields(
    title: String,
    content: String,
) -> ApplicationResult<(ArticleTitle, ArticleContent)> {
    let mut errors = FieldErrors::new();
    let title = errors.capture("title", ArticleTitle::new(title));
    let content = errors.capture("content", ArticleContent::new(content));

    match (title, content) {
        (Some(title), Some(content)) => Ok((title, content)),
        _ => Err(errors.into()),
    }
}
