pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ARTICLE_CONTENT_MAX_LEN, ARTICLE_TITLE_MAX_LEN, ArticleContent, ArticleId, ArticleTitle,
};
