use crate::domain::{article::EngagementTotals, user::User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Everything about a user that is safe to return. No password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.into(),
            name: user.name,
            username: user.username.map(Into::into),
            bio: user.bio,
            avatar: user.avatar,
            website: user.website,
            location: user.location,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsDto {
    pub articles: u64,
    pub followers: u64,
    pub following: u64,
    pub total_views: i64,
    pub total_likes: i64,
}

impl From<EngagementTotals> for UserStatsDto {
    fn from(totals: EngagementTotals) -> Self {
        Self {
            articles: totals.articles,
            followers: 0,
            following: 0,
            total_views: totals.views,
            total_likes: totals.likes,
        }
    }
}

/// The caller's own profile with display defaults filled in.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub username: String,
    pub bio: String,
    pub avatar: String,
    pub website: Option<String>,
    pub location: Option<String>,
    #[serde(with = "serde_time")]
    pub joined_date: DateTime<Utc>,
    pub stats: UserStatsDto,
}

impl UserProfileDto {
    pub fn from_parts(user: User, totals: EngagementTotals) -> Self {
        let username = user.display_username();
        Self {
            id: user.id.into(),
            email: user.email.into(),
            name: user.name,
            username,
            bio: user.bio.unwrap_or_default(),
            avatar: user.avatar.unwrap_or_default(),
            website: user.website,
            location: user.location,
            joined_date: user.created_at,
            stats: totals.into(),
        }
    }
}
