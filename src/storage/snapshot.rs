use std::sync::Arc;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::{GameRecord, JoinRequest, MatchRequest, MatchedTeam, Team};
use crate::storage::kv::{KeyValueStore, StorageError};
use crate::storage::SNAPSHOT_KEY;

pub const PLACEHOLDER_USER_ID: i64 = 0;
pub const PLACEHOLDER_EMAIL: &str = "guest@hoopmatch.local";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl SnapshotUser {
    pub fn placeholder() -> Self {
        Self {
            id: PLACEHOLDER_USER_ID,
            email: PLACEHOLDER_EMAIL.to_string(),
            nickname: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_USER_ID
    }
}

/// Offline copy of what the pages last knew. Advisory only.
///
/// `joinRequests` and `gameRecords` were added after the first release;
/// older documents without them decode with empty lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub user: SnapshotUser,
    #[serde(deserialize_with = "stored_teams")]
    pub teams: Vec<Team>,
    pub match_requests: Vec<MatchRequest>,
    pub matched_teams: Vec<MatchedTeam>,
    #[serde(default)]
    pub join_requests: Vec<JoinRequest>,
    #[serde(default)]
    pub game_records: Vec<GameRecord>,
}

impl AppSnapshot {
    pub fn empty() -> Self {
        Self {
            user: SnapshotUser::placeholder(),
            teams: Vec::new(),
            match_requests: Vec::new(),
            matched_teams: Vec::new(),
            join_requests: Vec::new(),
            game_records: Vec::new(),
        }
    }
}

/// Cached teams are read leniently: a stored `isOfficial` is ignored and
/// recomputed from the roster, and an entry that still cannot be decoded
/// is dropped on its own.
fn stored_teams<'de, D>(deserializer: D) -> Result<Vec<Team>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|mut entry| {
            if let Some(fields) = entry.as_object_mut() {
                fields.remove("isOfficial");
            }
            match serde_json::from_value::<Team>(entry) {
                Ok(team) => Some(team),
                Err(e) => {
                    tracing::warn!("Dropping unreadable cached team: {}", e);
                    None
                }
            }
        })
        .collect())
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Whole-document access to the snapshot key.
#[derive(Clone)]
pub struct SnapshotStore {
    store: Arc<dyn KeyValueStore>,
}

impl SnapshotStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Never fails: a missing or unreadable document reads as
    /// [`AppSnapshot::empty`]. Nothing is written back.
    pub fn read(&self) -> AppSnapshot {
        let Some(raw) = self.store.get(SNAPSHOT_KEY) else {
            return AppSnapshot::empty();
        };
        match serde_json::from_str::<AppSnapshot>(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Discarding unreadable snapshot: {}", e);
                AppSnapshot::empty()
            }
        }
    }

    /// Replace the stored document. No merge with what is already there.
    pub fn write(&self, snapshot: &AppSnapshot) -> Result<(), StorageError> {
        let raw = serde_json::to_string(snapshot).map_err(|source| StorageError::Serialize {
            key: SNAPSHOT_KEY.to_string(),
            source,
        })?;
        self.store.set(SNAPSHOT_KEY, &raw)
    }

    /// Read, apply `change`, write the result back.
    pub fn update<F>(&self, change: F) -> Result<AppSnapshot, StorageError>
    where
        F: FnOnce(&mut AppSnapshot),
    {
        let mut snapshot = self.read();
        change(&mut snapshot);
        self.write(&snapshot)?;
        Ok(snapshot)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(SNAPSHOT_KEY)
    }
}
