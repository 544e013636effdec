pub mod entity;
pub mod read_time;
pub mod repository;
pub mod specifications;
pub mod stats;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, ArticleWithAuthor, NewArticle};
pub use read_time::ReadTime;
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use stats::EngagementTotals;
pub use value_objects::{ArticleContent, ArticleId, ArticleStatus, ArticleTags, ArticleTitle};
