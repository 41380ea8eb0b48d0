use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::common::{Validate, ValidationError};
use crate::models::team::TeamProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchRequestError {
    #[error("Match request {id} is already {status:?}")]
    AlreadyDecided { id: i64, status: MatchRequestStatus },
}

/// A directed proposal from one team to another to play a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub id: i64,
    pub requesting_team_id: i64,
    pub receiving_team_id: i64,
    #[serde(default)]
    pub message: String,
    pub status: MatchRequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MatchRequest {
    pub fn accept(&mut self, now: DateTime<Utc>) -> Result<(), MatchRequestError> {
        self.decide(MatchRequestStatus::Accepted, now)
    }

    pub fn reject(&mut self, now: DateTime<Utc>) -> Result<(), MatchRequestError> {
        self.decide(MatchRequestStatus::Rejected, now)
    }

    // Only pending requests move; a decision is final.
    fn decide(&mut self, status: MatchRequestStatus, now: DateTime<Utc>) -> Result<(), MatchRequestError> {
        if self.status != MatchRequestStatus::Pending {
            return Err(MatchRequestError::AlreadyDecided {
                id: self.id,
                status: self.status,
            });
        }
        self.status = status;
        self.updated_at = now;
        Ok(())
    }
}

impl Validate for MatchRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.requesting_team_id == self.receiving_team_id {
            return Err(ValidationError::new("receivingTeamId", "a team cannot challenge itself"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMatchRequest {
    pub requesting_team_id: i64,
    pub receiving_team_id: i64,
    #[serde(default)]
    pub message: String,
}

impl Validate for SendMatchRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.requesting_team_id == self.receiving_team_id {
            return Err(ValidationError::new("receivingTeamId", "a team cannot challenge itself"));
        }
        if self.message.chars().count() > 200 {
            return Err(ValidationError::new("message", "cannot exceed 200 characters"));
        }
        Ok(())
    }
}

/// A pairing of two teams, recorded once a request is accepted or a game
/// is created directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedTeam {
    pub id: i64,
    pub team_id: i64,
    pub opponent: TeamProfile,
    pub matched_at: DateTime<Utc>,
}

impl Validate for MatchedTeam {}
