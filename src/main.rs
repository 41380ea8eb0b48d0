use std::net::TcpListener;
use std::sync::Arc;

use hoopmatch::config::settings::{get_config, get_jwt_settings};
use hoopmatch::mock::{run, MockDatabase};
use hoopmatch::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = get_config().map_err(|e| {
        eprintln!("Failed to read the config: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    let subscriber = get_subscriber(
        "hoopmatch-mock".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let jwt_settings = get_jwt_settings(&config);
    let db = match MockDatabase::seeded() {
        Ok(db) => Arc::new(db),
        Err(e) => {
            tracing::error!("Failed to seed the mock database: {:?}", e);
            std::process::exit(1);
        }
    };

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Mock backend listening on {}", address);

    run(listener, db, jwt_settings)?.await
}
