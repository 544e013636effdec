// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use devblog_api::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use devblog_api::domain::user::UserId;

pub const AUTHOR_TOKEN: &str = "author-token";
pub const OTHER_TOKEN: &str = "other-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

pub const AUTHOR_ID: i64 = 1;
pub const OTHER_ID: i64 = 2;
pub const AUTHOR_EMAIL: &str = "author@example.com";
pub const OTHER_EMAIL: &str = "other@example.com";

const ISSUED_PREFIX: &str = "issued-";

pub fn principal(id: i64, email: &str) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        email: email.to_string(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Token manager with two well-known tokens. Tokens it issues look like
/// `issued-<id>-<email>` and authenticate back to the same principal.
#[derive(Clone, Debug, Default)]
pub struct FixedTokenManager;

#[async_trait]
impl TokenManager for FixedTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("{ISSUED_PREFIX}{}-{}", subject.user_id, subject.email),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            AUTHOR_TOKEN => Ok(principal(AUTHOR_ID, AUTHOR_EMAIL)),
            OTHER_TOKEN => Ok(principal(OTHER_ID, OTHER_EMAIL)),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            other => other
                .strip_prefix(ISSUED_PREFIX)
                .and_then(|rest| rest.split_once('-'))
                .and_then(|(id, email)| Some((id.parse::<i64>().ok()?, email)))
                .map(|(id, email)| principal(id, email))
                .ok_or_else(|| ApplicationError::unauthorized("invalid token")),
        }
    }
}

/// Deterministic "hash" so login can be exercised without argon2 cost.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("bad password"))
        }
    }
}
