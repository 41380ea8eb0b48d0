pub mod config;
pub mod telemetry;
pub mod models;
pub mod client;
pub mod services;
pub mod feedback;
pub mod game;
pub mod storage;
pub mod flows;
#[cfg(feature = "mock")]
pub mod mock;

pub use crate::client::{ApiClient, ApiError, HttpClient};
