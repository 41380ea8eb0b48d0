use std::env;
use std::path::PathBuf;
use config::{Config, File, ConfigError};
use dotenv::dotenv;
use secrecy::SecretString;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub client: ClientSettings,
    pub application: ApplicationSettings,
    pub jwt: JwtSettings,
}

/// Signing parameters for the bearer tokens the mock backend issues.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct JwtSettings {
    pub secret: SecretString,
    pub expiration_hours: i64,
}

impl JwtSettings {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret: SecretString::new(secret.into_boxed_str()),
            expiration_hours,
        }
    }
}

/// Where the data-access layer sends its requests and keeps its local store.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_storage_dir() -> String {
    ".hoopmatch".to_string()
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            storage_dir: default_storage_dir(),
        }
    }

    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_dir)
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Bind address and log level of the mock backend.
#[derive(serde::Deserialize, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    pub log_level: String,
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    dotenv().ok();

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let env_filename = format!("{}.yml", environment.as_str());
    let config = Config::builder()
        .add_source(File::from(configuration_directory.join("base.yml")))
        .add_source(File::from(configuration_directory.join(env_filename)).required(false))
        .add_source(
            config::Environment::default()
                .prefix("APP")
                .prefix_separator("__")
                .separator("__")
        )
        .build()?;

    let mut settings = config.try_deserialize::<Settings>()?;

    if let Ok(base_url) = env::var("API_BASE_URL") {
        settings.client.base_url = base_url;
    }

    if let Ok(jwt_secret) = env::var("JWT_SECRET") {
        settings.jwt.secret = SecretString::new(jwt_secret.into_boxed_str());
    }

    Ok(settings)
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_jwt_settings(settings: &Settings) -> JwtSettings {
    settings.jwt.clone()
}
