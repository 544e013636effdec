use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::EngagementTotals,
};

impl UserQueryService {
    pub async fn get_profile(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<UserProfileDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(ApplicationError::user_not_found)?;

        let articles = self.article_repo.list_by_author(actor.id).await?;
        let totals = EngagementTotals::from_articles(&articles);

        Ok(UserProfileDto::from_parts(user, totals))
    }
}
