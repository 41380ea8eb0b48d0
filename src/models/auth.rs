use serde::{Deserialize, Serialize};
use secrecy::{ExposeSecret, SecretString};

use crate::models::common::{require_email, require_non_empty, Validate, ValidationError};
use crate::models::user::{Gender, Position};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    #[serde(serialize_with = "serialize_secret_string",
            deserialize_with = "deserialize_secret_string")]
    pub password: SecretString,
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_style: Option<String>,
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_email("email", &self.email)?;
        require_non_empty("nickname", &self.nickname)?;
        if self.password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::new(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "serialize_secret_string",
            deserialize_with = "deserialize_secret_string")]
    pub password: SecretString,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::new(password.into().into_boxed_str()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
}

impl Validate for LoginResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("token", &self.token)
    }
}

/// Passwords travel to the backend in the clear; `SecretString` only keeps
/// them out of `Debug` output and logs.
pub fn serialize_secret_string<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}

pub fn deserialize_secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(SecretString::new(s.into_boxed_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_sends_password_but_debug_hides_it() {
        let request = LoginRequest::new("pg@hoopmatch.dev", "hunter2hunter2");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["password"], "hunter2hunter2");
        assert!(!format!("{:?}", request).contains("hunter2hunter2"));
    }

    #[test]
    fn signup_rejects_short_passwords() {
        let request = SignupRequest {
            email: "new@hoopmatch.dev".to_string(),
            password: SecretString::new("short".into()),
            nickname: "Rookie".to_string(),
            gender: None,
            address: None,
            height: None,
            position: None,
            play_style: None,
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.field, "password");
    }
}
