use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// The public feed: published articles with their authors, newest first.
    pub async fn list_published(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list_published().await?;
        Ok(records
            .into_iter()
            .filter(|record| record.article.status.is_published())
            .map(Into::into)
            .collect())
    }
}
