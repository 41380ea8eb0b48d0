use crate::client::{ApiError, HttpClient};
use crate::models::auth::{LoginRequest, LoginResponse, SignupRequest};
use crate::models::Validate;
use crate::storage::{EMAIL_KEY, TOKEN_KEY};

pub struct AuthService<'a> {
    http: &'a HttpClient,
}

impl<'a> AuthService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// The backend answers signup with a plain-text confirmation.
    #[tracing::instrument(
        name = "Signup",
        skip(self, request),
        fields(email = %request.email)
    )]
    pub async fn signup(&self, request: &SignupRequest) -> Result<String, ApiError> {
        request.validate()?;
        self.http.post_text("/api/auth/signup", request).await
    }

    /// Logs in and keeps the token and email in local storage so every
    /// later request carries the bearer header.
    #[tracing::instrument(
        name = "Login",
        skip(self, request),
        fields(email = %request.email)
    )]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.http.post("/api/auth/login", request).await?;
        let store = self.http.store();
        store.set(TOKEN_KEY, &response.token)?;
        store.set(EMAIL_KEY, &request.email)?;
        tracing::info!("Logged in as user {}", response.user_id);
        Ok(response)
    }

    /// Local only; there is no logout endpoint.
    pub fn logout(&self) -> Result<(), ApiError> {
        let store = self.http.store();
        store.remove(TOKEN_KEY)?;
        store.remove(EMAIL_KEY)?;
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.http.store().get(TOKEN_KEY).is_some()
    }

    pub fn logged_in_email(&self) -> Option<String> {
        self.http.store().get(EMAIL_KEY)
    }
}
