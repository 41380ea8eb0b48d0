use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::mock::database::MockDatabase;
use crate::mock::error::MockError;
use crate::mock::handlers::current_user;
use crate::mock::middleware::auth::Claims;
use crate::models::{CreateTeamRequest, Validate};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamQuery {
    pub user_id: i64,
}

/// The `userId` query parameter must name the caller.
#[tracing::instrument(
    name = "Create team",
    skip(team_request, query, db, claims),
    fields(team_name = %team_request.name, user = %claims.sub)
)]
pub async fn create_team(
    team_request: web::Json<CreateTeamRequest>,
    query: web::Query<CreateTeamQuery>,
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    let user_id = current_user(&claims)?;
    if query.user_id != user_id {
        tracing::warn!("userId {} does not match token user {}", query.user_id, user_id);
        return Err(MockError::Forbidden("Cannot create a team for another user".to_string()));
    }
    team_request.validate()?;

    let team = db.create_team(user_id, &team_request)?;
    Ok(HttpResponse::Created().json(team))
}

pub async fn get_my_teams(
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    let teams = db.teams_of_user(current_user(&claims)?)?;
    Ok(HttpResponse::Ok().json(teams))
}

pub async fn get_team(
    path: web::Path<i64>,
    db: web::Data<MockDatabase>,
) -> Result<HttpResponse, MockError> {
    Ok(HttpResponse::Ok().json(db.team(path.into_inner())?))
}

pub async fn get_team_members(
    path: web::Path<i64>,
    db: web::Data<MockDatabase>,
) -> Result<HttpResponse, MockError> {
    Ok(HttpResponse::Ok().json(db.members(path.into_inner())?))
}

pub async fn get_match_suggestions(
    path: web::Path<i64>,
    db: web::Data<MockDatabase>,
) -> Result<HttpResponse, MockError> {
    Ok(HttpResponse::Ok().json(db.match_suggestions(path.into_inner())?))
}

pub async fn get_matched_teams(
    path: web::Path<i64>,
    db: web::Data<MockDatabase>,
) -> Result<HttpResponse, MockError> {
    Ok(HttpResponse::Ok().json(db.matched_teams(path.into_inner())?))
}

pub async fn get_game_records(
    path: web::Path<i64>,
    db: web::Data<MockDatabase>,
) -> Result<HttpResponse, MockError> {
    Ok(HttpResponse::Ok().json(db.game_records(path.into_inner())?))
}
