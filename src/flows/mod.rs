//! Page-level flows: the sequencing and navigation rules the UI follows
//! around service calls. Each flow either yields the next [`Route`] or a
//! [`FlowError`] carrying the message to toast and where to fall back to.

pub mod feedback_flow;
pub mod route;
pub mod signup_flow;
pub mod team_flow;

use thiserror::Error;

use crate::client::ApiError;
use crate::models::ValidationError;

pub use feedback_flow::{submit_feedback, FeedbackOutcome, FeedbackSubmission};
pub use route::Route;
pub use signup_flow::{login, ProfileDraft, SignupFlow, SignupStep};
pub use team_flow::{load_my_team, MyTeamView};

#[derive(Debug, Error)]
#[error("{error}")]
pub struct FlowError {
    #[source]
    pub error: ApiError,
    pub fallback: Route,
}

impl FlowError {
    pub fn new(error: impl Into<ApiError>, fallback: Route) -> Self {
        Self {
            error: error.into(),
            fallback,
        }
    }

    /// An expired or missing token always sends the user back to login.
    pub fn from_api(error: ApiError, fallback: Route) -> Self {
        let fallback = if error.is_unauthorized() { Route::Login } else { fallback };
        Self { error, fallback }
    }

    /// Text for the transient notification.
    pub fn toast(&self) -> String {
        self.error.to_string()
    }
}

impl From<ValidationError> for FlowError {
    fn from(error: ValidationError) -> Self {
        // Form-level problems keep the user where they are.
        Self::new(error, Route::Stay)
    }
}
