// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleStatus, ArticleTags,
    ArticleTitle, ArticleUpdate, ArticleWithAuthor, ArticleWriteRepository, NewArticle, ReadTime,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{AuthorSummary, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, content, excerpt, status, published_at, read_time, tags, \
     author_id, views, likes, comments, created_at, updated_at";

const ARTICLE_WITH_AUTHOR_SELECT: &str = "SELECT a.id, a.title, a.content, a.excerpt, a.status, \
     a.published_at, a.read_time, a.tags, a.author_id, a.views, a.likes, a.comments, \
     a.created_at, a.updated_at, \
     u.name AS author_name, u.username AS author_username, u.avatar AS author_avatar \
     FROM articles a JOIN users u ON u.id = a.author_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    excerpt: Option<String>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    read_time: i32,
    tags: Vec<String>,
    author_id: i64,
    views: i64,
    likes: i64,
    comments: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ArticleWithAuthorRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    author_name: Option<String>,
    author_username: Option<String>,
    author_avatar: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            excerpt: row.excerpt,
            status: row.status.parse::<ArticleStatus>()?,
            published_at: row.published_at,
            read_time: ReadTime::from_stored(row.read_time),
            tags: ArticleTags::new(row.tags)?,
            author_id: UserId::new(row.author_id)?,
            views: row.views,
            likes: row.likes,
            comments: row.comments,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<ArticleWithAuthorRow> for ArticleWithAuthor {
    type Error = DomainError;

    fn try_from(row: ArticleWithAuthorRow) -> Result<Self, Self::Error> {
        let article = Article::try_from(row.article)?;
        let author = AuthorSummary {
            id: article.author_id,
            name: row.author_name,
            username: row.author_username,
            avatar: row.author_avatar,
        };
        Ok(ArticleWithAuthor { article, author })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            excerpt,
            status,
            published_at,
            read_time,
            tags,
            author_id,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, content, excerpt, status, published_at, read_time, tags, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(excerpt)
            .bind(status.as_str())
            .bind(published_at)
            .bind(i32::from(read_time))
            .bind(tags.into_inner())
            .bind(i64::from(author_id))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            author_id,
            title,
            content,
            excerpt,
            status,
            published_at,
            tags,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some((content, read_time)) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
            builder.push(", read_time = ");
            builder.push_bind(i32::from(read_time));
        }

        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }

        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }

        // Never overwrite an existing stamp.
        if let Some(published_at) = published_at {
            builder.push(", published_at = COALESCE(published_at, ");
            builder.push_bind(published_at);
            builder.push(")");
        }

        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND author_id = ");
        builder.push_bind(i64::from(author_id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId, author_id: UserId) -> DomainResult<Article> {
        let sql = format!(
            "DELETE FROM articles WHERE id = $1 AND author_id = $2 RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .bind(i64::from(author_id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_with_author(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>> {
        let sql = format!("{ARTICLE_WITH_AUTHOR_SELECT} WHERE a.id = $1");
        let row = sqlx::query_as::<_, ArticleWithAuthorRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleWithAuthor::try_from).transpose()
    }

    async fn list_published(&self) -> DomainResult<Vec<ArticleWithAuthor>> {
        let sql = format!(
            "{ARTICLE_WITH_AUTHOR_SELECT} WHERE a.status = 'published' \
             ORDER BY a.published_at DESC, a.id DESC"
        );
        let rows = sqlx::query_as::<_, ArticleWithAuthorRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleWithAuthor::try_from).collect()
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE author_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(author_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
