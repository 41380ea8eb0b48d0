use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;

use crate::config::settings::JwtSettings;
use crate::mock::database::MockDatabase;
use crate::mock::error::MockError;
use crate::mock::password::{hash_password, verify_password};
use crate::mock::token::issue_token;
use crate::models::auth::{LoginRequest, LoginResponse, SignupRequest};
use crate::models::Validate;

#[tracing::instrument(
    name = "Mock signup",
    skip(signup_form, db),
    fields(email = %signup_form.email)
)]
pub async fn signup(
    signup_form: web::Json<SignupRequest>,
    db: web::Data<MockDatabase>,
) -> Result<HttpResponse, MockError> {
    signup_form.validate()?;
    let password_hash = hash_password(signup_form.password.expose_secret())?;
    let user = db.create_user(&signup_form, password_hash)?;
    tracing::info!("Registered user {}", user.id);

    // The real backend answers with a plain confirmation, not JSON.
    Ok(HttpResponse::Created()
        .content_type("text/plain; charset=utf-8")
        .body("Signup successful"))
}

#[tracing::instrument(
    name = "Mock login",
    skip(login_form, db, jwt_settings),
    fields(email = %login_form.email)
)]
pub async fn login(
    login_form: web::Json<LoginRequest>,
    db: web::Data<MockDatabase>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, MockError> {
    let invalid = || MockError::Unauthorized("Invalid email or password".to_string());

    let (user, password_hash) = db.credentials(&login_form.email).ok_or_else(|| {
        tracing::info!("Unknown email");
        invalid()
    })?;
    if !verify_password(login_form.password.expose_secret(), &password_hash) {
        tracing::info!("Invalid password");
        return Err(invalid());
    }

    let token = issue_token(user.id, &user.email, &jwt_settings)?;
    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user_id: user.id,
    }))
}
