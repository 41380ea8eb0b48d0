use crate::client::{ApiError, HttpClient};
use crate::models::Notification;

pub struct NotificationService<'a> {
    http: &'a HttpClient,
}

impl<'a> NotificationService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Newest first.
    #[tracing::instrument(name = "Fetch notifications", skip(self))]
    pub async fn list(&self) -> Result<Vec<Notification>, ApiError> {
        self.http.get("/api/notifications").await
    }

    #[tracing::instrument(name = "Mark notification read", skip(self))]
    pub async fn mark_read(&self, notification_id: i64) -> Result<(), ApiError> {
        self.http
            .put::<(), _>(&format!("/api/notifications/{}/read", notification_id), None)
            .await
    }

    pub async fn unread_count(&self) -> Result<usize, ApiError> {
        Ok(self.list().await?.iter().filter(|n| !n.read).count())
    }
}
