// src/application/commands/articles/ownership.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article,
        specifications::{ArticleSpecification, IsArticleAuthorSpec},
    },
};

pub(super) fn ensure_author(
    actor: &AuthenticatedUser,
    article: &Article,
    action: &str,
) -> ApplicationResult<()> {
    if IsArticleAuthorSpec::new(article, actor.id).is_satisfied() {
        return Ok(());
    }

    tracing::warn!(
        article_id = %article.id,
        user_id = %actor.id,
        action,
        "rejected article mutation by non-author"
    );
    Err(ApplicationError::forbidden(format!(
        "only the author may {action} this article"
    )))
}
