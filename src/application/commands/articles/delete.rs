// src/application/commands/articles/delete.rs
use super::{ArticleCommandService, ownership::ensure_author};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self.load_article(id).await?;
        ensure_author(actor, &article, "delete")?;

        let deleted = self.write_repo.delete(id, actor.id).await?;
        tracing::info!(article_id = %id, author_id = %actor.id, "article deleted");
        Ok(deleted.into())
    }
}
