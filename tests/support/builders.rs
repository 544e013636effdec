// tests/support/builders.rs
use chrono::{DateTime, Utc};

use devblog_api::domain::article::{
    Article, ArticleContent, ArticleId, ArticleStatus, ArticleTags, ArticleTitle, ReadTime,
};
use devblog_api::domain::user::{Email, PasswordHash, User, UserId, Username};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    content: String,
    status: ArticleStatus,
    published_at: Option<DateTime<Utc>>,
    author_id: i64,
    views: i64,
    likes: i64,
    comments: i64,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            content: "Test body".into(),
            status: ArticleStatus::Draft,
            published_at: None,
            author_id: 1,
            views: 0,
            likes: 0,
            comments: 0,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.status = ArticleStatus::Published;
        self.published_at = Some(at);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn counters(mut self, views: i64, likes: i64, comments: i64) -> Self {
        self.views = views;
        self.likes = likes;
        self.comments = comments;
        self
    }

    pub fn build(self) -> Article {
        let content = ArticleContent::new(self.content).unwrap();
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            read_time: ReadTime::from_content(&content),
            content,
            excerpt: None,
            status: self.status,
            published_at: self.published_at,
            tags: ArticleTags::default(),
            author_id: UserId::new(self.author_id).unwrap(),
            views: self.views,
            likes: self.likes,
            comments: self.comments,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A stored user whose password is `password` under `StrictPasswordHasher`.
pub fn user(id: i64, email: &str, username: Option<&str>) -> User {
    User {
        id: UserId::new(id).unwrap(),
        email: Email::new(email).unwrap(),
        password_hash: PasswordHash::new("hash::password").unwrap(),
        name: Some(format!("User {id}")),
        username: username.map(|u| Username::new(u).unwrap()),
        bio: None,
        avatar: None,
        website: None,
        location: None,
        created_at: fixed_now(),
    }
}
