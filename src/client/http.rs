use std::sync::Arc;
use std::time::Duration;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::client::error::ApiError;
use crate::config::settings::ClientSettings;
use crate::models::Validate;
use crate::storage::{KeyValueStore, TOKEN_KEY};

/// The single choke point for every backend call.
///
/// Attaches the bearer token found in local storage, applies the client
/// timeout and normalizes error and empty-body handling. It never retries,
/// refreshes tokens or de-duplicates in-flight requests.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    store: Arc<dyn KeyValueStore>,
}

impl HttpClient {
    pub fn new(settings: &ClientSettings, store: Arc<dyn KeyValueStore>) -> Result<Self, ApiError> {
        // Fail early on a base URL that could never produce a valid request.
        Url::parse(&settings.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        self.request::<(), T>(Method::GET, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Validate,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// POST without a request body.
    pub async fn post_empty<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        self.request::<(), T>(Method::POST, path, None).await
    }

    pub async fn put<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Validate,
    {
        self.request(Method::PUT, path, body).await
    }

    pub async fn delete<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        self.request::<(), T>(Method::DELETE, path, None).await
    }

    /// For endpoints that answer with plain text instead of JSON.
    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let response = self.execute(Method::GET, path, None).await?;
        Ok(response.text().await?)
    }

    pub async fn post_text<B>(&self, path: &str, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let response = self.execute(Method::POST, path, Some(body)).await?;
        Ok(response.text().await?)
    }

    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Validate,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        let value = self.send(method, path, body).await?;
        decode(value)
    }

    /// Untyped call. `None` is the empty value: a 204, a zero
    /// `Content-Length` or a blank body.
    pub async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Option<Value>, ApiError> {
        let response = self.execute(method, path, body).await?;

        if response.status() == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
            return Ok(None);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    #[tracing::instrument(
        name = "Backend request",
        skip(self, body),
        fields(method = %method, path = %path)
    )]
    async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> Result<Response, ApiError> {
        let url = self.url(path)?;
        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.store.get(TOKEN_KEY) {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Request failed before a response arrived: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = if text.trim().is_empty() {
                status_line(status)
            } else {
                text
            };
            tracing::warn!("Backend returned {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!("Backend returned {}", status);
        Ok(response)
    }
}

/// Decode a response body, then run boundary validation.
///
/// The empty value becomes the type's own empty form (`()`, `None`, an
/// empty list). Types without one still see JSON `null`.
pub fn decode<T>(value: Option<Value>) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let decoded: T = match value {
        Some(value) => serde_json::from_value(value)?,
        None => match T::empty_value() {
            Some(empty) => empty,
            None => serde_json::from_value(Value::Null)?,
        },
    };
    decoded.validate()?;
    Ok(decoded)
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
