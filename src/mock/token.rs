use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::ExposeSecret;

use crate::config::settings::JwtSettings;
use crate::mock::error::MockError;
use crate::mock::middleware::auth::Claims;

pub fn issue_token(user_id: i64, email: &str, jwt_settings: &JwtSettings) -> Result<String, MockError> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(jwt_settings.expiration_hours))
        .ok_or_else(|| MockError::Internal("token expiry overflowed".to_string()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: expiration,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    )?)
}
