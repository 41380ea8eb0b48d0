use std::sync::Arc;
use chrono::Utc;

use crate::models::{NewPost, Post, Validate, ValidationError};
use crate::storage::kv::{KeyValueStore, StorageError};
use crate::storage::{POSTS_KEY, TEAM_NAME_KEY, TEAM_PHOTO_KEY};

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Keys that predate the snapshot document: the team name and photo set
/// during team creation, and the recruiting posts list.
#[derive(Clone)]
pub struct LegacyStore {
    store: Arc<dyn KeyValueStore>,
}

impl LegacyStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn team_name(&self) -> Option<String> {
        self.store.get(TEAM_NAME_KEY)
    }

    pub fn set_team_name(&self, name: &str) -> Result<(), StorageError> {
        self.store.set(TEAM_NAME_KEY, name)
    }

    /// Photo is kept as whatever string the upload produced (usually a data URL).
    pub fn team_photo(&self) -> Option<String> {
        self.store.get(TEAM_PHOTO_KEY)
    }

    pub fn set_team_photo(&self, photo: &str) -> Result<(), StorageError> {
        self.store.set(TEAM_PHOTO_KEY, photo)
    }

    pub fn posts(&self) -> Vec<Post> {
        let Some(raw) = self.store.get(POSTS_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable posts list: {}", e);
            Vec::new()
        })
    }

    pub fn add_post(&self, new_post: NewPost) -> Result<Post, PostError> {
        new_post.validate()?;
        let mut posts = self.posts();
        let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let post = new_post.into_post(id, Utc::now());
        posts.push(post.clone());
        self.write_posts(&posts)?;
        Ok(post)
    }

    /// Returns whether a post with that id existed.
    pub fn delete_post(&self, id: i64) -> Result<bool, StorageError> {
        let mut posts = self.posts();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Ok(false);
        }
        self.write_posts(&posts)?;
        Ok(true)
    }

    fn write_posts(&self, posts: &[Post]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(posts).map_err(|source| StorageError::Serialize {
            key: POSTS_KEY.to_string(),
            source,
        })?;
        self.store.set(POSTS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn new_post(location: &str) -> NewPost {
        NewPost {
            team_id: 3,
            location: location.to_string(),
            latitude: 37.5,
            longitude: 127.0,
            scheduled_at: Utc::now(),
            chat_link: None,
            description: String::new(),
        }
    }

    #[test]
    fn posts_get_increasing_ids_and_can_be_deleted() {
        let legacy = LegacyStore::new(Arc::new(MemoryStore::new()));

        let first = legacy.add_post(new_post("Court A")).unwrap();
        let second = legacy.add_post(new_post("Court B")).unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        assert!(legacy.delete_post(first.id).unwrap());
        assert!(!legacy.delete_post(first.id).unwrap());

        let remaining = legacy.posts();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].location, "Court B");
    }

    #[test]
    fn invalid_post_is_not_stored() {
        let legacy = LegacyStore::new(Arc::new(MemoryStore::new()));
        let result = legacy.add_post(new_post("  "));
        assert!(matches!(result, Err(PostError::Invalid(_))));
        assert!(legacy.posts().is_empty());
    }

    #[test]
    fn corrupt_posts_list_reads_as_empty() {
        let memory = Arc::new(MemoryStore::new());
        memory.set(POSTS_KEY, "nope").unwrap();
        let legacy = LegacyStore::new(memory);
        assert!(legacy.posts().is_empty());
    }

    #[test]
    fn team_name_and_photo_round_trip() {
        let legacy = LegacyStore::new(Arc::new(MemoryStore::new()));
        assert_eq!(legacy.team_name(), None);
        legacy.set_team_name("Seoul Ballers").unwrap();
        legacy.set_team_photo("data:image/png;base64,AAAA").unwrap();
        assert_eq!(legacy.team_name().as_deref(), Some("Seoul Ballers"));
        assert_eq!(legacy.team_photo().as_deref(), Some("data:image/png;base64,AAAA"));
    }
}
