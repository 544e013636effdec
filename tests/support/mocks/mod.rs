// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repo;
pub mod security;
pub mod time;
pub mod user_repo;

pub use article_repo::InMemoryArticleRepo;
pub use security::{
    AUTHOR_EMAIL, AUTHOR_ID, AUTHOR_TOKEN, EXPIRED_TOKEN, FixedTokenManager, OTHER_EMAIL,
    OTHER_ID, OTHER_TOKEN, StrictPasswordHasher, principal,
};
pub use time::{TestClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
