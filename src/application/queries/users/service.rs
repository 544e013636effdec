use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, user::UserRepository};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            user_repo,
            article_repo,
        }
    }
}
