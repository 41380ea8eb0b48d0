use actix_web::{web, HttpResponse};

use crate::mock::database::MockDatabase;
use crate::mock::error::MockError;
use crate::mock::handlers::current_user;
use crate::mock::middleware::auth::Claims;
use crate::models::{UpdateProfileRequest, Validate};

pub async fn get_me(
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    let user = db.user(current_user(&claims)?)?;
    Ok(HttpResponse::Ok().json(user))
}

#[tracing::instrument(name = "Update profile", skip(update, db, claims), fields(user = %claims.sub))]
pub async fn update_me(
    update: web::Json<UpdateProfileRequest>,
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    update.validate()?;
    let user = db.update_user(current_user(&claims)?, &update)?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn get_user_teams(
    path: web::Path<i64>,
    db: web::Data<MockDatabase>,
) -> Result<HttpResponse, MockError> {
    let teams = db.teams_of_user(path.into_inner())?;
    Ok(HttpResponse::Ok().json(teams))
}
