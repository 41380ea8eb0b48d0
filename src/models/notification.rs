use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    MatchRequest,
    MatchAccepted,
    MatchRejected,
    GameReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub kind: NotificationKind,
    pub message: String,
    #[serde(default)]
    pub related_id: Option<i64>,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Validate for Notification {}
