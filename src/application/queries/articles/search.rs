use super::ArticleQueryService;
use crate::application::{dto::ArticleListDto, error::ApplicationResult};

pub struct SearchArticlesQuery {
    pub term: Option<String>,
}

impl ArticleQueryService {
    /// A blank or missing term lists every article.
    ///
    /// # Errors
    ///
    /// Only repository failures.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<ArticleListDto> {
        let term = query
            .term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty());

        let articles = self.read_repo.search(term).await?;
        Ok(articles.into_iter().collect())
    }
}
