use std::sync::Arc;

use chrono::Utc;

use hoopmatch::config::settings::ClientSettings;
use hoopmatch::models::NewPost;
use hoopmatch::storage::{FileStore, KeyValueStore, SNAPSHOT_KEY};
use hoopmatch::ApiClient;

fn file_backed_client(dir: &std::path::Path) -> ApiClient {
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir).unwrap());
    ApiClient::from_settings(&ClientSettings::new("http://localhost:8080"), store).unwrap()
}

fn temp_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("hoopmatch-test-{}", uuid::Uuid::new_v4()))
}

#[test]
fn snapshot_survives_a_restart() {
    let dir = temp_dir();

    let first = file_backed_client(&dir);
    first
        .snapshot()
        .update(|snapshot| {
            snapshot.user.id = 42;
            snapshot.user.email = "pg@hoopmatch.dev".to_string();
        })
        .unwrap();

    let second = file_backed_client(&dir);
    let snapshot = second.snapshot().read();
    assert_eq!(snapshot.user.id, 42);
    assert!(snapshot.teams.is_empty());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn corrupt_snapshot_reads_as_empty_state_without_being_rewritten() {
    let dir = temp_dir();
    let client = file_backed_client(&dir);
    client.http().store().set(SNAPSHOT_KEY, "{ not json").unwrap();

    let snapshot = client.snapshot().read();

    assert!(snapshot.user.is_placeholder());
    assert_eq!(snapshot.user.email, "guest@hoopmatch.local");
    assert_eq!(client.http().store().get(SNAPSHOT_KEY).as_deref(), Some("{ not json"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn legacy_posts_persist_between_clients() {
    let dir = temp_dir();

    let first = file_backed_client(&dir);
    first.legacy().set_team_name("Seoul Ballers").unwrap();
    let post = first
        .legacy()
        .add_post(NewPost {
            team_id: 1,
            location: "Hangang court".to_string(),
            latitude: 37.52,
            longitude: 126.93,
            scheduled_at: Utc::now(),
            chat_link: Some("https://open.kakao.com/o/hoopers".to_string()),
            description: "Need a center".to_string(),
        })
        .unwrap();

    let second = file_backed_client(&dir);
    assert_eq!(second.legacy().team_name().as_deref(), Some("Seoul Ballers"));
    assert_eq!(second.legacy().posts(), vec![post.clone()]);
    assert!(second.legacy().delete_post(post.id).unwrap());
    assert!(first.legacy().posts().is_empty());

    std::fs::remove_dir_all(&dir).ok();
}
