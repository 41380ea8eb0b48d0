pub mod common;
pub mod auth;
pub mod user;
pub mod team;
pub mod game;
pub mod match_request;
pub mod notification;
pub mod post;

pub use common::{Validate, ValidationError};
pub use user::{Gender, Position, UpdateProfileRequest, User};
pub use team::{CreateTeamRequest, SkillLevel, Team, TeamDna, TeamMember, TeamProfile, TeamRole, TeamStats};
pub use game::{
    CoachingReport, CreateGameRequest, FinishGameRequest, FinishGameResponse, Game, GameRecord,
    GameResult, GameStatus, PositionFeedback,
};
pub use match_request::{MatchRequest, MatchRequestError, MatchRequestStatus, MatchedTeam, SendMatchRequest};
pub use notification::{Notification, NotificationKind};
pub use post::{JoinRequest, JoinRequestStatus, NewPost, Post};
