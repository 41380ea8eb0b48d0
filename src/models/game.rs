use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::feedback::FeedbackTag;
use crate::models::common::{require_non_empty, Validate, ValidationError};
use crate::models::user::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Scheduled,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameResult {
    Win,
    Lose,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub status: GameStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

impl Game {
    pub fn involves(&self, team_id: i64) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn opponent_of(&self, team_id: i64) -> Option<i64> {
        if self.home_team_id == team_id {
            Some(self.away_team_id)
        } else if self.away_team_id == team_id {
            Some(self.home_team_id)
        } else {
            None
        }
    }
}

impl Validate for Game {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.home_team_id == self.away_team_id {
            return Err(ValidationError::new("awayTeamId", "a team cannot play itself"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub team_id: i64,
    pub opponent_team_id: i64,
}

impl Validate for CreateGameRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.team_id == self.opponent_team_id {
            return Err(ValidationError::new("opponentTeamId", "a team cannot play itself"));
        }
        Ok(())
    }
}

/// One finished game from one team's point of view. Never edited after it
/// is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: i64,
    pub team_id: i64,
    pub game_id: i64,
    pub opponent_name: String,
    pub result: GameResult,
    pub ai_comment: String,
    pub created_at: DateTime<Utc>,
}

impl Validate for GameRecord {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionFeedback {
    pub position: Position,
    pub tags: Vec<FeedbackTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishGameRequest {
    pub team_id: i64,
    pub opponent_name: String,
    pub result: GameResult,
    pub feedbacks: Vec<PositionFeedback>,
}

impl Validate for FinishGameRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("opponentName", &self.opponent_name)?;
        for (index, feedback) in self.feedbacks.iter().enumerate() {
            if self.feedbacks[..index].iter().any(|f| f.position == feedback.position) {
                return Err(ValidationError::new(
                    "feedbacks",
                    format!("position {} is rated twice", feedback.position),
                ));
            }
            if feedback.tags.len() > 4 {
                return Err(ValidationError::new(
                    "feedbacks",
                    format!("position {} has more than four tags", feedback.position),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishGameResponse {
    pub game_id: i64,
    pub team_id: i64,
}

impl Validate for FinishGameResponse {}

/// The "AI coaching" write-up rendered on the coaching page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingReport {
    pub game_id: i64,
    pub team_id: i64,
    pub ai_comment: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Validate for CoachingReport {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("aiComment", &self.ai_comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_request_rejects_duplicate_positions() {
        let request = FinishGameRequest {
            team_id: 1,
            opponent_name: "Busan Blockers".to_string(),
            result: GameResult::Win,
            feedbacks: vec![
                PositionFeedback { position: Position::Center, tags: vec![FeedbackTag::DefenseGood] },
                PositionFeedback { position: Position::Center, tags: vec![] },
            ],
        };
        assert_eq!(request.validate().unwrap_err().field, "feedbacks");
    }

    #[test]
    fn opponent_lookup_works_from_either_side() {
        let game = Game {
            id: 1,
            home_team_id: 10,
            away_team_id: 20,
            status: GameStatus::Scheduled,
            created_at: Utc::now(),
            finished_at: None,
        };
        assert_eq!(game.opponent_of(10), Some(20));
        assert_eq!(game.opponent_of(20), Some(10));
        assert_eq!(game.opponent_of(30), None);
    }

    #[test]
    fn game_result_uses_upper_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&GameResult::Lose).unwrap(), "\"LOSE\"");
    }
}
