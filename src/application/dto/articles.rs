use crate::domain::article::{Article, ArticleStatus, ArticleWithAuthor};
use crate::domain::user::AuthorSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i64,
    pub name: Option<String>,
    pub username: Option<String>,
    pub avatar: Option<String>,
}

impl From<AuthorSummary> for AuthorDto {
    fn from(author: AuthorSummary) -> Self {
        Self {
            id: author.id.into(),
            name: author.name,
            username: author.username,
            avatar: author.avatar,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub status: ArticleStatus,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub read_time: u32,
    pub tags: Vec<String>,
    pub author_id: i64,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            excerpt: article.excerpt,
            status: article.status,
            published_at: article.published_at,
            read_time: article.read_time.minutes(),
            tags: article.tags.into_inner(),
            author_id: article.author_id.into(),
            views: article.views,
            likes: article.likes,
            comments: article.comments,
            created_at: article.created_at,
            updated_at: article.updated_at,
            author: None,
        }
    }
}

impl From<ArticleWithAuthor> for ArticleDto {
    fn from(value: ArticleWithAuthor) -> Self {
        let mut dto = Self::from(value.article);
        dto.author = Some(value.author.into());
        dto
    }
}
