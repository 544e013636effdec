// tests/support/mocks/article_repo.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use devblog_api::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleUpdate, ArticleWithAuthor,
    ArticleWriteRepository, NewArticle,
};
use devblog_api::domain::errors::{DomainError, DomainResult};
use devblog_api::domain::user::UserId;
use std::sync::{Arc, Mutex};

use super::user_repo::InMemoryUserRepo;

/// In-memory article table. Writes follow the same guards as the SQL
/// adapter: updates need a matching author and `updated_at`, deletes a
/// matching author.
#[derive(Debug)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
    users: Arc<InMemoryUserRepo>,
}

impl InMemoryArticleRepo {
    pub fn new(users: Arc<InMemoryUserRepo>) -> Self {
        Self {
            articles: Mutex::new(Vec::new()),
            users,
        }
    }

    /// Store an article as-is, keeping its id.
    pub fn seed(&self, article: Article) {
        self.articles.lock().unwrap().push(article);
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| i64::from(a.id) == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    /// Simulate a write landing from another request.
    pub fn touch(&self, id: i64, at: DateTime<Utc>) {
        if let Some(article) = self
            .articles
            .lock()
            .unwrap()
            .iter_mut()
            .find(|a| i64::from(a.id) == id)
        {
            article.updated_at = at;
        }
    }

    fn with_author(&self, article: Article) -> ArticleWithAuthor {
        let author = self.users.author_summary(article.author_id);
        ArticleWithAuthor { article, author }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        if self.users.get(new.author_id).is_none() {
            return Err(DomainError::NotFound("author not found".into()));
        }

        let mut articles = self.articles.lock().unwrap();
        let next_id = articles.iter().map(|a| i64::from(a.id)).max().unwrap_or(0) + 1;
        let article = Article {
            id: ArticleId::new(next_id)?,
            title: new.title,
            content: new.content,
            excerpt: new.excerpt,
            status: new.status,
            published_at: new.published_at,
            read_time: new.read_time,
            tags: new.tags,
            author_id: new.author_id,
            views: 0,
            likes: 0,
            comments: 0,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| {
                a.id == update.id
                    && a.author_id == update.author_id
                    && a.updated_at == update.original_updated_at
            })
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        let publishing = update.status == Some(ArticleStatus::Published);
        if publishing && article.published_at.is_none() && update.published_at.is_none() {
            return Err(DomainError::Validation(
                "published articles require published_at".into(),
            ));
        }

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some((content, read_time)) = update.content {
            article.content = content;
            article.read_time = read_time;
        }
        if let Some(excerpt) = update.excerpt {
            article.excerpt = excerpt;
        }
        if let Some(status) = update.status {
            article.status = status;
        }
        if let Some(published_at) = update.published_at {
            article.published_at.get_or_insert(published_at);
        }
        if let Some(tags) = update.tags {
            article.tags = tags;
        }
        article.updated_at = update.updated_at;

        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId, author_id: UserId) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let position = articles
            .iter()
            .position(|a| a.id == id && a.author_id == author_id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Ok(articles.remove(position))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(i64::from(id)))
    }

    async fn find_with_author(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>> {
        Ok(self.get(i64::from(id)).map(|a| self.with_author(a)))
    }

    async fn list_published(&self) -> DomainResult<Vec<ArticleWithAuthor>> {
        let mut published: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.status.is_published())
            .cloned()
            .collect();
        published.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(published.into_iter().map(|a| self.with_author(a)).collect())
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let mut owned: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.author_id == author_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(owned)
    }
}
