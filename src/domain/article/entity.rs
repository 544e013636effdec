// src/domain/article/entity.rs
use crate::domain::article::read_time::ReadTime;
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleStatus, ArticleTags, ArticleTitle,
};
use crate::domain::user::{AuthorSummary, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub excerpt: Option<String>,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub read_time: ReadTime,
    pub tags: ArticleTags,
    pub author_id: UserId,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Move to `status`. `published_at` is stamped the first time the article
    /// becomes published and is left alone afterwards. Returns the timestamp
    /// when this call stamped it.
    pub fn change_status(
        &mut self,
        status: ArticleStatus,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        if self.status == status {
            return None;
        }
        self.status = status;
        self.updated_at = now;
        if status.is_published() && self.published_at.is_none() {
            self.published_at = Some(now);
            return Some(now);
        }
        None
    }

    pub fn set_title(&mut self, title: ArticleTitle, now: DateTime<Utc>) {
        self.title = title;
        self.updated_at = now;
    }

    /// Replace the body and recompute the read time from it.
    pub fn set_content(&mut self, content: ArticleContent, now: DateTime<Utc>) {
        self.read_time = ReadTime::from_content(&content);
        self.content = content;
        self.updated_at = now;
    }

    pub fn set_excerpt(&mut self, excerpt: Option<String>, now: DateTime<Utc>) {
        self.excerpt = excerpt;
        self.updated_at = now;
    }

    pub fn set_tags(&mut self, tags: ArticleTags, now: DateTime<Utc>) {
        self.tags = tags;
        self.updated_at = now;
    }
}

/// An article joined with the public projection of its author.
#[derive(Debug, Clone)]
pub struct ArticleWithAuthor {
    pub article: Article,
    pub author: AuthorSummary,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub excerpt: Option<String>,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub read_time: ReadTime,
    pub tags: ArticleTags,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(
        title: ArticleTitle,
        content: ArticleContent,
        excerpt: Option<String>,
        status: ArticleStatus,
        tags: ArticleTags,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        let read_time = ReadTime::from_content(&content);
        let published_at = status.is_published().then_some(now);
        Self {
            title,
            content,
            excerpt,
            status,
            published_at,
            read_time,
            tags,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial write for an existing article.
///
/// The write only lands when the row still belongs to `author_id` and has not
/// been modified since `original_updated_at`.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub author_id: UserId,
    pub title: Option<ArticleTitle>,
    pub content: Option<(ArticleContent, ReadTime)>,
    pub excerpt: Option<Option<String>>,
    pub status: Option<ArticleStatus>,
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Option<ArticleTags>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(article: &Article) -> Self {
        Self {
            id: article.id,
            author_id: article.author_id,
            title: None,
            content: None,
            excerpt: None,
            status: None,
            published_at: None,
            tags: None,
            original_updated_at: article.updated_at,
            updated_at: article.updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent, read_time: ReadTime) -> Self {
        self.content = Some((content, read_time));
        self
    }

    pub fn with_excerpt(mut self, excerpt: Option<String>) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn with_tags(mut self, tags: ArticleTags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.excerpt.is_none()
            && self.status.is_none()
            && self.tags.is_none()
    }
}
