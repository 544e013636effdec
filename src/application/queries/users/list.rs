use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct GetUserQuery {
    pub id: i64,
}

impl UserQueryService {
    pub async fn list_users(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let id = UserId::new(query.id).map_err(|_| ApplicationError::user_not_found())?;
        self.user_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(ApplicationError::user_not_found)
    }
}
