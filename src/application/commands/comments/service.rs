use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{article::ArticleReadRepository, comment::CommentWriteRepository},
};

pub struct CommentCommandService {
    pub(super) write_repo: Arc<dyn CommentWriteRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    #[must_use]
    pub const fn new(
        write_repo: Arc<dyn CommentWriteRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            article_repo,
            clock,
        }
    }
}
