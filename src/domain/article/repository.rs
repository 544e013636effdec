// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleUpdate, ArticleWithAuthor, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Apply a partial update. Fails with `Conflict` when the row no longer
    /// matches the update's author or observed `updated_at`.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;

    /// Delete the article if it is still owned by `author_id`, returning the
    /// removed row.
    async fn delete(&self, id: ArticleId, author_id: UserId) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    async fn find_with_author(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>>;

    /// Published articles only, newest `published_at` first.
    async fn list_published(&self) -> DomainResult<Vec<ArticleWithAuthor>>;

    /// Every article owned by `author_id`, newest `created_at` first.
    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>>;
}
