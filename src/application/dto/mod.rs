pub mod articles;
pub mod comments;

pub use articles::{ArticleDto, ArticleListDto};
pub use comments::{CommentDto, CommentListDto};
