use actix_web::web;

use crate::mock::handlers::{
    auth_handler, game_handler, match_request_handler, notification_handler, team_handler, user_handler,
};
use crate::mock::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .route("/signup", web::post().to(auth_handler::signup))
            .route("/login", web::post().to(auth_handler::login)),
    );

    cfg.service(
        web::scope("/api/users")
            .wrap(AuthMiddleware)
            .service(
                web::resource("/me")
                    .route(web::get().to(user_handler::get_me))
                    .route(web::put().to(user_handler::update_me)),
            )
            .route("/{user_id}/teams", web::get().to(user_handler::get_user_teams)),
    );

    // "/my" has to be registered ahead of "/{team_id}".
    cfg.service(
        web::scope("/api/teams")
            .wrap(AuthMiddleware)
            .route("", web::post().to(team_handler::create_team))
            .route("/my", web::get().to(team_handler::get_my_teams))
            .route("/{team_id}", web::get().to(team_handler::get_team))
            .route("/{team_id}/members", web::get().to(team_handler::get_team_members))
            .route("/{team_id}/match-suggestions", web::get().to(team_handler::get_match_suggestions))
            .route("/{team_id}/matched-teams", web::get().to(team_handler::get_matched_teams))
            .route("/{team_id}/game-records", web::get().to(team_handler::get_game_records)),
    );

    cfg.service(
        web::scope("/api/games")
            .wrap(AuthMiddleware)
            .route("/match", web::post().to(game_handler::create_game))
            .route("/{game_id}", web::get().to(game_handler::get_game))
            .route("/{game_id}/finish-and-feedback", web::post().to(game_handler::finish_and_feedback))
            .route("/{game_id}/report", web::post().to(game_handler::create_report)),
    );

    cfg.service(
        web::scope("/api/match-requests")
            .wrap(AuthMiddleware)
            .route("", web::post().to(match_request_handler::send_match_request))
            .route("/received", web::get().to(match_request_handler::get_received_requests))
            .route("/{request_id}/accept", web::put().to(match_request_handler::accept_match_request))
            .route("/{request_id}/reject", web::put().to(match_request_handler::reject_match_request)),
    );

    cfg.service(
        web::scope("/api/notifications")
            .wrap(AuthMiddleware)
            .route("", web::get().to(notification_handler::get_notifications))
            .route("/{notification_id}/read", web::put().to(notification_handler::mark_notification_read)),
    );
}
