use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

impl ArticleQueryService {
    /// Drafts and published articles owned by the caller.
    pub async fn list_own_articles(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_by_author(actor.id).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
