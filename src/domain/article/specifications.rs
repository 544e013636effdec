// src/domain/article/specifications.rs
use crate::domain::article::entity::Article;
use crate::domain::user::UserId;

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Only the author of an article may change or remove it.
pub struct IsArticleAuthorSpec<'a> {
    article: &'a Article,
    user_id: UserId,
}

impl<'a> IsArticleAuthorSpec<'a> {
    pub fn new(article: &'a Article, user_id: UserId) -> Self {
        Self { article, user_id }
    }
}

impl ArticleSpecification for IsArticleAuthorSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.is_authored_by(self.user_id)
    }
}
