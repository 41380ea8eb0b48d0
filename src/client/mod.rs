pub mod error;
pub mod http;

use std::sync::Arc;

pub use error::ApiError;
pub use http::HttpClient;

use crate::config::settings::ClientSettings;
use crate::services::{
    AuthService, CoachingService, MatchingService, NotificationService, TeamService, UserService,
};
use crate::storage::{KeyValueStore, LegacyStore, SnapshotStore};

/// Entry point for UI code: one typed service per resource family, plus
/// the two local stores that pages consult on their own.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn from_settings(settings: &ClientSettings, store: Arc<dyn KeyValueStore>) -> Result<Self, ApiError> {
        Ok(Self::new(HttpClient::new(settings, store)?))
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.http)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(&self.http)
    }

    pub fn teams(&self) -> TeamService<'_> {
        TeamService::new(&self.http)
    }

    pub fn coaching(&self) -> CoachingService<'_> {
        CoachingService::new(&self.http)
    }

    pub fn matching(&self) -> MatchingService<'_> {
        MatchingService::new(&self.http)
    }

    pub fn notifications(&self) -> NotificationService<'_> {
        NotificationService::new(&self.http)
    }

    pub fn snapshot(&self) -> SnapshotStore {
        SnapshotStore::new(self.http.store().clone())
    }

    pub fn legacy(&self) -> LegacyStore {
        LegacyStore::new(self.http.store().clone())
    }
}
