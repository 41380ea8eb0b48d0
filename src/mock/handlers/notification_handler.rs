use actix_web::{web, HttpResponse};

use crate::mock::database::MockDatabase;
use crate::mock::error::MockError;
use crate::mock::handlers::current_user;
use crate::mock::middleware::auth::Claims;

pub async fn get_notifications(
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    Ok(HttpResponse::Ok().json(db.notifications(current_user(&claims)?)))
}

pub async fn mark_notification_read(
    path: web::Path<i64>,
    db: web::Data<MockDatabase>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, MockError> {
    db.mark_notification_read(current_user(&claims)?, path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
