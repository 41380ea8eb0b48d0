//! A stand-in backend for local development and integration tests.
//!
//! Serves the same endpoints the client services call, backed by an
//! in-memory [`MockDatabase`] seeded from [`fixtures`].

pub mod database;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod middleware;
pub mod password;
pub mod routes;
pub mod token;

use std::net::TcpListener;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{http::header, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::config::settings::JwtSettings;
pub use database::MockDatabase;
pub use error::MockError;
use routes::init_routes;

pub fn run(listener: TcpListener, db: Arc<MockDatabase>, jwt_settings: JwtSettings) -> Result<Server, std::io::Error> {
    let db = web::Data::from(db);
    let jwt_settings = web::Data::new(jwt_settings);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(db.clone())
            .app_data(jwt_settings.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
