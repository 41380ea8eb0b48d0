use crate::client::{ApiError, HttpClient};
use crate::models::{Team, UpdateProfileRequest, User, Validate};

pub struct UserService<'a> {
    http: &'a HttpClient,
}

impl<'a> UserService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    #[tracing::instrument(name = "Fetch my profile", skip(self))]
    pub async fn me(&self) -> Result<User, ApiError> {
        self.http.get("/api/users/me").await
    }

    #[tracing::instrument(name = "Update my profile", skip(self, request))]
    pub async fn update_me(&self, request: &UpdateProfileRequest) -> Result<User, ApiError> {
        request.validate()?;
        self.http.put("/api/users/me", Some(request)).await
    }

    #[tracing::instrument(name = "Fetch teams of user", skip(self))]
    pub async fn teams_of(&self, user_id: i64) -> Result<Vec<Team>, ApiError> {
        self.http.get(&format!("/api/users/{}/teams", user_id)).await
    }
}
