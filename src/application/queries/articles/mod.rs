mod detail;
mod get_by_id;
mod list;
mod service;

pub use detail::GetArticleDetailQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use service::ArticleQueryService;
