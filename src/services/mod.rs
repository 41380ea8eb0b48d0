pub mod auth_service;
pub mod user_service;
pub mod team_service;
pub mod coaching_service;
pub mod matching_service;
pub mod notification_service;

pub use auth_service::AuthService;
pub use user_service::UserService;
pub use team_service::TeamService;
pub use coaching_service::CoachingService;
pub use matching_service::MatchingService;
pub use notification_service::NotificationService;
