use crate::client::{ApiError, HttpClient};
use crate::models::{CreateTeamRequest, Team, TeamMember, Validate};

pub struct TeamService<'a> {
    http: &'a HttpClient,
}

impl<'a> TeamService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    #[tracing::instrument(
        name = "Create team",
        skip(self, request),
        fields(team_name = %request.name)
    )]
    pub async fn create(&self, user_id: i64, request: &CreateTeamRequest) -> Result<Team, ApiError> {
        request.validate()?;
        self.http.post(&format!("/api/teams?userId={}", user_id), request).await
    }

    /// Teams the logged-in user belongs to. Empty when they have none.
    #[tracing::instrument(name = "Fetch my teams", skip(self))]
    pub async fn my_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.http.get("/api/teams/my").await
    }

    #[tracing::instrument(name = "Fetch team", skip(self))]
    pub async fn get(&self, team_id: i64) -> Result<Team, ApiError> {
        self.http.get(&format!("/api/teams/{}", team_id)).await
    }

    #[tracing::instrument(name = "Fetch team members", skip(self))]
    pub async fn members(&self, team_id: i64) -> Result<Vec<TeamMember>, ApiError> {
        self.http.get(&format!("/api/teams/{}/members", team_id)).await
    }
}
