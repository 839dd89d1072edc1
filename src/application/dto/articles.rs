use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Creation timestamp (RFC 3339).
    pub date: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            date: article.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListDto {
    pub articles: Vec<ArticleDto>,
}

impl FromIterator<Article> for ArticleListDto {
    fn from_iter<I: IntoIterator<Item = Article>>(iter: I) -> Self {
        Self {
            articles: iter.into_iter().map(Into::into).collect(),
        }
    }
}
