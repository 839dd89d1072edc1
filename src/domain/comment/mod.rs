pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, NewComment};
pub use repository::{CommentReadRepository, CommentWriteRepository};
pub use value_objects::{
    COMMENT_CONTENT_MAX_LEN, COMMENT_TITLE_MAX_LEN, CommentContent, CommentId, CommentTitle,
};
