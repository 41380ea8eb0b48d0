use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::mock::database::MockDatabase;
use crate::mock::error::MockError;
use crate::mock::handlers::current_user;
use crate::mock::middleware::auth::Claims;
use crate::models::{CreateGameRequest, FinishGameRequest, Validate};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamQuery {
    pub team_id: i64,
}

#[tracing::instrument(
    name = "Create game",
    skip(game_request, db, claims),
    fields(team_id = game_request.team_id, opponent_team_id = game_request.opponent_team_id)
)]
pub async fn create_game(
    game_request: web::Json<CreateGameRequest>,
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    game_request.validate()?;
    let game = db.create_game(current_user(&claims)?, &game_request)?;
    Ok(HttpResponse::Created().json(game))
}

pub async fn get_game(
    path: web::Path<i64>,
    db: web::Data<MockDatabase>,
) -> Result<HttpResponse, MockError> {
    Ok(HttpResponse::Ok().json(db.game(path.into_inner())?))
}

#[tracing::instrument(
    name = "Finish game with feedback",
    skip(path, finish_request, db, claims),
    fields(game_id = %path, team_id = finish_request.team_id)
)]
pub async fn finish_and_feedback(
    path: web::Path<i64>,
    finish_request: web::Json<FinishGameRequest>,
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    finish_request.validate()?;
    let finished = db.finish_game(current_user(&claims)?, path.into_inner(), &finish_request)?;
    Ok(HttpResponse::Ok().json(finished))
}

#[tracing::instrument(
    name = "Create coaching report",
    skip(path, query, db, claims),
    fields(game_id = %path, team_id = query.team_id)
)]
pub async fn create_report(
    path: web::Path<i64>,
    query: web::Query<TeamQuery>,
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    let report = db.create_report(current_user(&claims)?, path.into_inner(), query.team_id)?;
    Ok(HttpResponse::Ok().json(report))
}
