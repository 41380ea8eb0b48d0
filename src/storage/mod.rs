//! Client-side persistence.
//!
//! A small key-value store stands in for browser local storage. It holds the
//! bearer token, the logged-in email, the offline application snapshot and
//! a couple of legacy keys. Nothing here is reconciled with API results:
//! pages read the snapshot and the API independently, last write wins.

pub mod kv;
pub mod legacy;
pub mod snapshot;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use legacy::{LegacyStore, PostError};
pub use snapshot::{AppSnapshot, SnapshotStore, SnapshotUser};

pub const SNAPSHOT_KEY: &str = "hoopmatch.appData";
pub const TOKEN_KEY: &str = "hoopmatch.accessToken";
pub const EMAIL_KEY: &str = "hoopmatch.userEmail";
pub const TEAM_NAME_KEY: &str = "hoopmatch.teamName";
pub const TEAM_PHOTO_KEY: &str = "hoopmatch.teamPhoto";
pub const POSTS_KEY: &str = "hoopmatch.posts";
