mod login;
mod password;
mod register;
mod service;
mod update_profile;

pub use login::{LoginResult, LoginUserCommand};
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update_profile::UpdateProfileCommand;
