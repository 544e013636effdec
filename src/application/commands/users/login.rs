use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(&command.email, &command.password)
            .await?;

        let subject = TokenSubject {
            user_id: user.id,
            email: user.email.clone(),
        };
        let token = self.token_manager.issue(subject).await?;
        tracing::debug!(user_id = %user.id, "access token issued");

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        // A malformed email cannot belong to anyone; answer like a wrong password.
        let email =
            Email::new(email).map_err(|_| ApplicationError::invalid_credentials())?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(ApplicationError::invalid_credentials)?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::invalid_credentials()
                }
                other => other,
            })?;

        Ok(user)
    }
}
