mod create;
mod service;

pub use create::CreateCommentCommand;
pub use service::CommentCommandService;
