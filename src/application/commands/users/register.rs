use super::{UserCommandService, password::validate_password, service::non_blank};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub username: Option<String>,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;
        let username = non_blank(command.username).map(Username::new).transpose()?;

        self.ensure_email_available(&email).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser {
            email,
            password_hash: PasswordHash::new(hashed)?,
            name: non_blank(command.name),
            username,
            created_at: self.clock.now(),
        };
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(user.into())
    }

    async fn ensure_email_available(&self, email: &Email) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }
        Ok(())
    }
}
