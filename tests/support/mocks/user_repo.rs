// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use devblog_api::domain::errors::{DomainError, DomainResult};
use devblog_api::domain::user::{
    AuthorSummary, Email, NewUser, User, UserId, UserProfileUpdate, UserRepository,
};
use std::sync::Mutex;

/// In-memory user table with the same uniqueness rules as the database.
#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub fn author_summary(&self, id: UserId) -> AuthorSummary {
        match self.get(id) {
            Some(user) => AuthorSummary {
                id,
                name: user.name,
                username: user.username.map(String::from),
                avatar: user.avatar,
            },
            None => AuthorSummary {
                id,
                name: None,
                username: None,
                avatar: None,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        if let Some(username) = &new_user.username {
            if users.iter().any(|u| u.username.as_ref() == Some(username)) {
                return Err(DomainError::Conflict("username already taken".into()));
            }
        }

        let next_id = users.iter().map(|u| i64::from(u.id)).max().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(next_id)?,
            email: new_user.email,
            password_hash: new_user.password_hash,
            name: new_user.name,
            username: new_user.username,
            bio: None,
            avatar: None,
            website: None,
            location: None,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by_key(|u| i64::from(u.id));
        Ok(users)
    }

    async fn update_profile(&self, update: UserProfileUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if let Some(username) = &update.username {
            if users
                .iter()
                .any(|u| u.id != update.id && u.username.as_ref() == Some(username))
            {
                return Err(DomainError::Conflict("username already taken".into()));
            }
        }

        let user = users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(name) = update.name {
            user.name = Some(name);
        }
        if let Some(username) = update.username {
            user.username = Some(username);
        }
        if let Some(bio) = update.bio {
            user.bio = Some(bio);
        }
        if let Some(avatar) = update.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(website) = update.website {
            user.website = Some(website);
        }
        if let Some(location) = update.location {
            user.location = Some(location);
        }
        Ok(user.clone())
    }
}
