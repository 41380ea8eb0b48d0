use crate::client::{ApiError, HttpClient};
use crate::models::{CreateGameRequest, Game, MatchRequest, MatchedTeam, SendMatchRequest, Team, Validate};

pub struct MatchingService<'a> {
    http: &'a HttpClient,
}

impl<'a> MatchingService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    #[tracing::instrument(name = "Fetch match suggestions", skip(self))]
    pub async fn suggestions(&self, team_id: i64) -> Result<Vec<Team>, ApiError> {
        self.http.get(&format!("/api/teams/{}/match-suggestions", team_id)).await
    }

    /// Schedules a game directly, without going through a match request.
    #[tracing::instrument(
        name = "Create game",
        skip(self, request),
        fields(team_id = request.team_id, opponent_team_id = request.opponent_team_id)
    )]
    pub async fn create_game(&self, request: &CreateGameRequest) -> Result<Game, ApiError> {
        request.validate()?;
        self.http.post("/api/games/match", request).await
    }

    #[tracing::instrument(
        name = "Send match request",
        skip(self, request),
        fields(requesting_team_id = request.requesting_team_id, receiving_team_id = request.receiving_team_id)
    )]
    pub async fn send_request(&self, request: &SendMatchRequest) -> Result<MatchRequest, ApiError> {
        request.validate()?;
        self.http.post("/api/match-requests", request).await
    }

    #[tracing::instrument(name = "Fetch received match requests", skip(self))]
    pub async fn received_requests(&self) -> Result<Vec<MatchRequest>, ApiError> {
        self.http.get("/api/match-requests/received").await
    }

    #[tracing::instrument(name = "Accept match request", skip(self))]
    pub async fn accept(&self, request_id: i64) -> Result<MatchRequest, ApiError> {
        self.http
            .put::<(), _>(&format!("/api/match-requests/{}/accept", request_id), None)
            .await
    }

    #[tracing::instrument(name = "Reject match request", skip(self))]
    pub async fn reject(&self, request_id: i64) -> Result<MatchRequest, ApiError> {
        self.http
            .put::<(), _>(&format!("/api/match-requests/{}/reject", request_id), None)
            .await
    }

    #[tracing::instrument(name = "Fetch matched teams", skip(self))]
    pub async fn matched_teams(&self, team_id: i64) -> Result<Vec<MatchedTeam>, ApiError> {
        self.http.get(&format!("/api/teams/{}/matched-teams", team_id)).await
    }
}
