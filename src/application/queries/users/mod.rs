mod list;
mod profile;
mod service;

pub use list::GetUserQuery;
pub use service::UserQueryService;
