pub mod articles;
pub mod categories;
pub mod comments;

pub use articles::{ArticleDetailDto, ArticleDto};
pub use categories::CategoryDto;
pub use comments::CommentDto;
