use std::collections::BTreeMap;

use crate::client::ApiClient;
use crate::feedback::{map_feedback_tags, AnswerSheet};
use crate::flows::{FlowError, Route};
use crate::models::{CoachingReport, FinishGameRequest, GameResult, Position, PositionFeedback};

/// Everything the post-game feedback form collects.
#[derive(Debug, Clone)]
pub struct FeedbackSubmission {
    pub game_id: i64,
    pub team_id: i64,
    pub opponent_name: String,
    pub result: GameResult,
    pub answers: BTreeMap<Position, AnswerSheet>,
}

impl FeedbackSubmission {
    /// Tags per rated position, in lineup order.
    pub fn position_feedbacks(&self) -> Vec<PositionFeedback> {
        self.answers
            .iter()
            .map(|(position, sheet)| PositionFeedback {
                position: *position,
                tags: map_feedback_tags(*position, sheet),
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackOutcome {
    pub report: CoachingReport,
    pub next: Route,
}

/// Finish the game with feedback, then ask for the coaching report.
///
/// The report call uses the game and team ids the first call returned.
/// Navigation to the coaching page happens only when both succeed. When
/// the second call fails the game stays finished; nothing is rolled back.
#[tracing::instrument(
    name = "Submit game feedback",
    skip(api, submission),
    fields(game_id = submission.game_id, team_id = submission.team_id)
)]
pub async fn submit_feedback(api: &ApiClient, submission: &FeedbackSubmission) -> Result<FeedbackOutcome, FlowError> {
    let fallback = Route::TeamDetail(submission.team_id);
    let request = FinishGameRequest {
        team_id: submission.team_id,
        opponent_name: submission.opponent_name.clone(),
        result: submission.result,
        feedbacks: submission.position_feedbacks(),
    };

    let coaching = api.coaching();
    let finished = coaching
        .finish_and_feedback(submission.game_id, &request)
        .await
        .map_err(|e| FlowError::from_api(e, fallback))?;

    let report = coaching
        .create_report(finished.game_id, finished.team_id)
        .await
        .map_err(|e| {
            tracing::warn!("Game {} finished but report creation failed: {}", finished.game_id, e);
            FlowError::from_api(e, fallback)
        })?;

    Ok(FeedbackOutcome {
        report,
        next: Route::Coaching(finished.game_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{uniform_answers, Answer, FeedbackTag};

    #[test]
    fn positions_are_tagged_in_lineup_order() {
        let mut answers = BTreeMap::new();
        answers.insert(Position::Center, uniform_answers(Position::Center, Answer::Negative));
        answers.insert(Position::PointGuard, uniform_answers(Position::PointGuard, Answer::Positive));

        let submission = FeedbackSubmission {
            game_id: 1,
            team_id: 2,
            opponent_name: "Busan Blockers".to_string(),
            result: GameResult::Lose,
            answers,
        };
        let feedbacks = submission.position_feedbacks();

        assert_eq!(feedbacks[0].position, Position::PointGuard);
        assert_eq!(feedbacks[0].tags.last(), Some(&FeedbackTag::SpeedGood));
        assert_eq!(feedbacks[1].position, Position::Center);
        assert_eq!(
            feedbacks[1].tags,
            vec![FeedbackTag::PassBad, FeedbackTag::DefenseBad, FeedbackTag::TeamworkBad, FeedbackTag::DefenseBad]
        );
    }
}
