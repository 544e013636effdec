use crate::domain::article::EngagementTotals;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDto {
    pub total_views: i64,
    pub total_likes: i64,
    pub total_comments: i64,
    pub articles_count: u64,
}

impl From<EngagementTotals> for AnalyticsDto {
    fn from(totals: EngagementTotals) -> Self {
        Self {
            total_views: totals.views,
            total_likes: totals.likes,
            total_comments: totals.comments,
            articles_count: totals.articles,
        }
    }
}
