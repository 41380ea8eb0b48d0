use std::net::TcpListener;
use std::sync::Arc;

use once_cell::sync::Lazy;
use secrecy::SecretString;

use hoopmatch::config::settings::{get_config, get_jwt_settings, ClientSettings};
use hoopmatch::mock::{fixtures, run, MockDatabase};
use hoopmatch::models::auth::LoginRequest;
use hoopmatch::storage::{KeyValueStore, MemoryStore};
use hoopmatch::telemetry::{get_subscriber, init_subscriber};
use hoopmatch::ApiClient;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db: Arc<MockDatabase>,
    pub store: Arc<MemoryStore>,
    pub api: ApiClient,
}

impl TestApp {
    /// A second client against the same backend with its own storage.
    pub fn new_client(&self) -> (ApiClient, Arc<MemoryStore>) {
        client_for(&self.address)
    }
}

pub fn client_for(address: &str) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let kv: Arc<dyn KeyValueStore> = store.clone();
    let api = ApiClient::from_settings(&ClientSettings::new(address), kv).expect("Failed to build client");
    (api, store)
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let configuration = get_config().expect("Failed to read configuration.");
    let jwt_settings = get_jwt_settings(&configuration);
    let db = Arc::new(MockDatabase::seeded().expect("Failed to seed mock database"));

    let server = run(listener, db.clone(), jwt_settings).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    let (api, store) = client_for(&address);
    TestApp { address, db, store, api }
}

pub fn secret(value: &str) -> SecretString {
    SecretString::new(value.into())
}

pub async fn login_as(api: &ApiClient, email: &str) {
    api.auth()
        .login(&LoginRequest::new(email, fixtures::FIXTURE_PASSWORD))
        .await
        .expect("Fixture login failed");
}
