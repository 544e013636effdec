use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Any status is returned to any caller; drafts double as preview links.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)
            .map_err(|_| ApplicationError::article_not_found())?;
        let record = self
            .read_repo
            .find_with_author(id)
            .await?
            .ok_or_else(ApplicationError::article_not_found)?;
        Ok(record.into())
    }
}
