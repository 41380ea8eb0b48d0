pub mod auth_handler;
pub mod user_handler;
pub mod team_handler;
pub mod game_handler;
pub mod match_request_handler;
pub mod notification_handler;

use crate::mock::error::MockError;
use crate::mock::middleware::auth::Claims;

/// The caller's user id, taken from the validated token.
pub(crate) fn current_user(claims: &Claims) -> Result<i64, MockError> {
    claims
        .user_id()
        .ok_or_else(|| MockError::Unauthorized("Invalid token subject".to_string()))
}
