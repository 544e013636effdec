pub mod analytics;
pub mod articles;
pub mod auth;
pub mod serde_time;
pub mod users;

pub use analytics::AnalyticsDto;
pub use articles::{ArticleDto, AuthorDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use users::{UserDto, UserProfileDto, UserStatsDto};
