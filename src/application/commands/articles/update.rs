use super::{ArticleCommandService, ownership::ensure_author, service::normalize_excerpt};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{
        Article, ArticleContent, ArticleId, ArticleStatus, ArticleTags, ArticleTitle,
        ArticleUpdate,
    },
};
use chrono::{DateTime, Utc};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub status: Option<ArticleStatus>,
    pub tags: Option<Vec<String>>,
}

struct ValidatedChanges {
    title: Option<ArticleTitle>,
    content: Option<ArticleContent>,
    excerpt: Option<Option<String>>,
    status: Option<ArticleStatus>,
    tags: Option<ArticleTags>,
}

impl UpdateArticleCommand {
    fn validate(self) -> ApplicationResult<ValidatedChanges> {
        Ok(ValidatedChanges {
            title: self.title.map(ArticleTitle::new).transpose()?,
            content: self.content.map(ArticleContent::new).transpose()?,
            excerpt: self.excerpt.map(|e| normalize_excerpt(Some(e))),
            status: self.status,
            tags: self.tags.map(ArticleTags::new).transpose()?,
        })
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self.load_article(id).await?;
        ensure_author(actor, &article, "update")?;

        let changes = command.validate()?;
        let now = self.clock.now();
        let mut update = ArticleUpdate::new(&article);

        update = Self::apply_content_changes(&mut article, &changes, now, update);
        if let Some(status) = changes.status {
            update = Self::apply_status_change(&mut article, status, now, update);
        }

        if update.is_empty() {
            return Ok(article.into());
        }

        update.set_updated_at(now);
        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    fn apply_content_changes(
        article: &mut Article,
        changes: &ValidatedChanges,
        now: DateTime<Utc>,
        mut update: ArticleUpdate,
    ) -> ArticleUpdate {
        if let Some(title) = &changes.title {
            article.set_title(title.clone(), now);
            update = update.with_title(title.clone());
        }
        if let Some(content) = &changes.content {
            article.set_content(content.clone(), now);
            update = update.with_content(content.clone(), article.read_time);
        }
        if let Some(excerpt) = &changes.excerpt {
            article.set_excerpt(excerpt.clone(), now);
            update = update.with_excerpt(excerpt.clone());
        }
        if let Some(tags) = &changes.tags {
            article.set_tags(tags.clone(), now);
            update = update.with_tags(tags.clone());
        }
        update
    }

    fn apply_status_change(
        article: &mut Article,
        status: ArticleStatus,
        now: DateTime<Utc>,
        mut update: ArticleUpdate,
    ) -> ArticleUpdate {
        if let Some(stamped) = article.change_status(status, now) {
            tracing::info!(article_id = %article.id, published_at = %stamped, "article published");
            update = update.with_published_at(stamped);
        }
        update.with_status(article.status)
    }
}
