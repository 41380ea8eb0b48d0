use actix_web::{web, HttpResponse};

use crate::mock::database::MockDatabase;
use crate::mock::error::MockError;
use crate::mock::handlers::current_user;
use crate::mock::middleware::auth::Claims;
use crate::models::{SendMatchRequest, Validate};

#[tracing::instrument(
    name = "Send match request",
    skip(match_request, db, claims),
    fields(
        requesting_team_id = match_request.requesting_team_id,
        receiving_team_id = match_request.receiving_team_id
    )
)]
pub async fn send_match_request(
    match_request: web::Json<SendMatchRequest>,
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    match_request.validate()?;
    let created = db.send_match_request(current_user(&claims)?, &match_request)?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn get_received_requests(
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    Ok(HttpResponse::Ok().json(db.received_match_requests(current_user(&claims)?)))
}

pub async fn accept_match_request(
    path: web::Path<i64>,
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    let decided = db.decide_match_request(current_user(&claims)?, path.into_inner(), true)?;
    tracing::info!("Match request {} accepted", decided.id);
    Ok(HttpResponse::Ok().json(decided))
}

pub async fn reject_match_request(
    path: web::Path<i64>,
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    let decided = db.decide_match_request(current_user(&claims)?, path.into_inner(), false)?;
    tracing::info!("Match request {} rejected", decided.id);
    Ok(HttpResponse::Ok().json(decided))
}
