mod create;
mod delete;
mod service;
mod update;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use service::CommentCommandService;
pub use update::UpdateCommentCommand;
