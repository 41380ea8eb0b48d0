use crate::client::{ApiError, HttpClient};
use crate::models::{CoachingReport, FinishGameRequest, FinishGameResponse, Game, GameRecord, Validate};

/// Post-game feedback and the coaching write-ups built from it.
pub struct CoachingService<'a> {
    http: &'a HttpClient,
}

impl<'a> CoachingService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    #[tracing::instrument(
        name = "Finish game with feedback",
        skip(self, request),
        fields(team_id = request.team_id)
    )]
    pub async fn finish_and_feedback(
        &self,
        game_id: i64,
        request: &FinishGameRequest,
    ) -> Result<FinishGameResponse, ApiError> {
        request.validate()?;
        self.http
            .post(&format!("/api/games/{}/finish-and-feedback", game_id), request)
            .await
    }

    #[tracing::instrument(name = "Create coaching report", skip(self))]
    pub async fn create_report(&self, game_id: i64, team_id: i64) -> Result<CoachingReport, ApiError> {
        self.http
            .post_empty(&format!("/api/games/{}/report?teamId={}", game_id, team_id))
            .await
    }

    #[tracing::instrument(name = "Fetch game records", skip(self))]
    pub async fn game_records(&self, team_id: i64) -> Result<Vec<GameRecord>, ApiError> {
        self.http.get(&format!("/api/teams/{}/game-records", team_id)).await
    }

    #[tracing::instrument(name = "Fetch game", skip(self))]
    pub async fn game(&self, game_id: i64) -> Result<Game, ApiError> {
        self.http.get(&format!("/api/games/{}", game_id)).await
    }
}
