use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{require_non_empty, Validate, ValidationError};

/// A "find teammates" listing. Lives only in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub team_id: i64,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub chat_link: Option<String>,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub team_id: i64,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub scheduled_at: DateTime<Utc>,
    pub chat_link: Option<String>,
    pub description: String,
}

impl NewPost {
    pub fn into_post(self, id: i64, created_at: DateTime<Utc>) -> Post {
        Post {
            id,
            team_id: self.team_id,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            scheduled_at: self.scheduled_at,
            chat_link: self.chat_link,
            description: self.description,
            created_at,
        }
    }
}

impl Validate for NewPost {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("location", &self.location)?;
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::new("latitude", format!("{} is out of range", self.latitude)));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::new("longitude", format!("{} is out of range", self.longitude)));
        }
        if let Some(link) = &self.chat_link {
            if !(link.starts_with("https://") || link.starts_with("http://")) {
                return Err(ValidationError::new("chatLink", "must be an http(s) link"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JoinRequestStatus {
    Pending,
    Approved,
    Declined,
}

/// A player asking to join a recruiting team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: i64,
    pub team_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub message: String,
    pub status: JoinRequestStatus,
    pub created_at: DateTime<Utc>,
}
