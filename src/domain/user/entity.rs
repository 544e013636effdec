// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub name: Option<String>,
    pub username: Option<Username>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Username to show publicly, falling back to the email's local part.
    pub fn display_username(&self) -> String {
        self.username
            .as_ref()
            .map(|u| u.as_str().to_string())
            .unwrap_or_else(|| self.email.local_part().to_string())
    }
}

/// Public projection embedded next to articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub id: UserId,
    pub name: Option<String>,
    pub username: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: PasswordHash,
    pub name: Option<String>,
    pub username: Option<Username>,
    pub created_at: DateTime<Utc>,
}

/// Self-service profile edit. `None` leaves a field unchanged.
#[derive(Debug, Clone)]
pub struct UserProfileUpdate {
    pub id: UserId,
    pub name: Option<String>,
    pub username: Option<Username>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
}

impl UserProfileUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            name: None,
            username: None,
            bio: None,
            avatar: None,
            website: None,
            location: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.username.is_none()
            && self.bio.is_none()
            && self.avatar.is_none()
            && self.website.is_none()
            && self.location.is_none()
    }
}
