use super::{UserCommandService, service::non_blank};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{UserProfileUpdate, Username},
};

#[derive(Default)]
pub struct UpdateProfileCommand {
    pub name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let mut update = UserProfileUpdate::new(actor.id);
        update.name = non_blank(command.name);
        update.username = non_blank(command.username)
            .map(Username::new)
            .transpose()?;
        update.bio = command.bio;
        update.avatar = command.avatar;
        update.website = non_blank(command.website);
        update.location = non_blank(command.location);

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update_profile(update).await?;
        Ok(user.into())
    }
}
