// src/application/queries/analytics/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AnalyticsDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleReadRepository, EngagementTotals},
        user::UserId,
    },
};

/// Engagement totals, recomputed from the author's articles on every call.
pub struct AnalyticsQueryService {
    article_repo: Arc<dyn ArticleReadRepository>,
}

impl AnalyticsQueryService {
    pub fn new(article_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { article_repo }
    }

    pub async fn user_analytics(&self, user_id: UserId) -> ApplicationResult<AnalyticsDto> {
        let articles = self.article_repo.list_by_author(user_id).await?;
        Ok(EngagementTotals::from_articles(&articles).into())
    }

    pub async fn my_analytics(&self, actor: &AuthenticatedUser) -> ApplicationResult<AnalyticsDto> {
        self.user_analytics(actor.id).await
    }
}
