mod get_by_id;
mod list_by_author;
mod list_published;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use service::ArticleQueryService;
