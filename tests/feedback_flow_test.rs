use std::collections::BTreeMap;
use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};

use hoopmatch::feedback::{map_feedback_tags, uniform_answers, Answer, AnswerSheet, FeedbackTag};
use hoopmatch::flows::{submit_feedback, FeedbackSubmission, Route};
use hoopmatch::mock::fixtures::{
    BUSAN_BLOCKERS_ID, FREE_AGENT_EMAIL, SEOUL_BALLERS_ID, SEOUL_CAPTAIN_EMAIL, SEOUL_CAPTAIN_ID,
};
use hoopmatch::mock::{MockDatabase, MockError};
use hoopmatch::models::{
    CreateGameRequest, FinishGameRequest, GameResult, GameStatus, NotificationKind, Position,
};
use hoopmatch::ApiClient;

mod common;
use common::utils::{client_for, login_as, spawn_app};

fn all_positions(answer: Answer) -> BTreeMap<Position, AnswerSheet> {
    Position::ALL
        .iter()
        .map(|p| (*p, uniform_answers(*p, answer)))
        .collect()
}

async fn schedule_game(api: &ApiClient) -> i64 {
    api.matching()
        .create_game(&CreateGameRequest { team_id: SEOUL_BALLERS_ID, opponent_team_id: BUSAN_BLOCKERS_ID })
        .await
        .unwrap()
        .id
}

async fn finish_as_seoul_captain(
    db: web::Data<MockDatabase>,
    game_id: web::Path<i64>,
    request: web::Json<FinishGameRequest>,
) -> Result<HttpResponse, MockError> {
    let finished = db.finish_game(SEOUL_CAPTAIN_ID, game_id.into_inner(), &request)?;
    Ok(HttpResponse::Ok().json(finished))
}

async fn report_unavailable() -> HttpResponse {
    HttpResponse::InternalServerError().body("Report generator is down")
}

/// A backend whose finish endpoint works against `db` but whose report
/// endpoint always fails.
fn spawn_without_reports(db: Arc<MockDatabase>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let data = web::Data::from(db);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/api/games/{game_id}/finish-and-feedback", web::post().to(finish_as_seoul_captain))
            .route("/api/games/{game_id}/report", web::post().to(report_unavailable))
    })
    .listen(listener)
    .expect("Failed to listen")
    .run();
    let _ = tokio::spawn(server);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn all_positive_feedback_produces_a_report_and_opens_coaching() {
    let app = spawn_app().await;
    login_as(&app.api, SEOUL_CAPTAIN_EMAIL).await;
    let game_id = schedule_game(&app.api).await;

    let submission = FeedbackSubmission {
        game_id,
        team_id: SEOUL_BALLERS_ID,
        opponent_name: "Busan Blockers".to_string(),
        result: GameResult::Win,
        answers: all_positions(Answer::Positive),
    };
    let feedbacks = submission.position_feedbacks();
    assert_eq!(feedbacks.len(), 5);
    assert!(feedbacks.iter().all(|f| f.tags.iter().all(|t| t.is_good())));
    assert_eq!(
        feedbacks[4].tags,
        vec![FeedbackTag::PassGood, FeedbackTag::DefenseGood, FeedbackTag::TeamworkGood, FeedbackTag::DefenseGood]
    );

    let outcome = submit_feedback(&app.api, &submission).await.unwrap();

    assert_eq!(outcome.next, Route::Coaching(game_id));
    assert_eq!(outcome.next.path(), format!("/coaching/{}", game_id));
    assert_eq!(outcome.report.game_id, game_id);
    assert_eq!(outcome.report.team_id, SEOUL_BALLERS_ID);
    assert!(!outcome.report.strengths.is_empty());
    assert!(outcome.report.weaknesses.is_empty());

    assert_eq!(app.api.coaching().game(game_id).await.unwrap().status, GameStatus::Finished);

    let records = app.api.coaching().game_records(SEOUL_BALLERS_ID).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].result, GameResult::Win);
    assert_eq!(records[0].ai_comment, outcome.report.ai_comment);

    let team = app.api.teams().get(SEOUL_BALLERS_ID).await.unwrap();
    assert_eq!(team.stats.games_played, 1);
    assert_eq!(team.stats.reports_count, 1);

    let inbox = app.db.notifications(SEOUL_CAPTAIN_ID);
    assert_eq!(inbox[0].kind, NotificationKind::GameReport);
}

#[tokio::test]
async fn neutral_answers_submit_no_tags() {
    let app = spawn_app().await;
    login_as(&app.api, SEOUL_CAPTAIN_EMAIL).await;
    let game_id = schedule_game(&app.api).await;

    let submission = FeedbackSubmission {
        game_id,
        team_id: SEOUL_BALLERS_ID,
        opponent_name: "Busan Blockers".to_string(),
        result: GameResult::Draw,
        answers: all_positions(Answer::Neutral),
    };
    assert!(submission.position_feedbacks().iter().all(|f| f.tags.is_empty()));

    let outcome = submit_feedback(&app.api, &submission).await.unwrap();
    assert!(outcome.report.strengths.is_empty());
    assert!(outcome.report.weaknesses.is_empty());
}

#[tokio::test]
async fn failed_finish_does_not_navigate() {
    let app = spawn_app().await;
    login_as(&app.api, FREE_AGENT_EMAIL).await;

    let submission = FeedbackSubmission {
        game_id: 999,
        team_id: SEOUL_BALLERS_ID,
        opponent_name: "Nobody".to_string(),
        result: GameResult::Lose,
        answers: all_positions(Answer::Negative),
    };

    let err = submit_feedback(&app.api, &submission).await.unwrap_err();

    assert_eq!(err.error.status(), Some(404));
    assert_eq!(err.fallback, Route::TeamDetail(SEOUL_BALLERS_ID));
    assert_eq!(err.toast(), "Game 999 not found");
}

#[tokio::test]
async fn report_failure_leaves_the_game_finished_and_does_not_navigate() {
    let db = Arc::new(MockDatabase::seeded().unwrap());
    let game_id = db
        .create_game(
            SEOUL_CAPTAIN_ID,
            &CreateGameRequest { team_id: SEOUL_BALLERS_ID, opponent_team_id: BUSAN_BLOCKERS_ID },
        )
        .unwrap()
        .id;
    let address = spawn_without_reports(db.clone());
    let (api, _) = client_for(&address);

    let submission = FeedbackSubmission {
        game_id,
        team_id: SEOUL_BALLERS_ID,
        opponent_name: "Busan Blockers".to_string(),
        result: GameResult::Win,
        answers: all_positions(Answer::Positive),
    };

    let err = submit_feedback(&api, &submission).await.unwrap_err();

    assert_eq!(err.error.status(), Some(500));
    assert_eq!(err.toast(), "Report generator is down");
    assert_eq!(err.fallback, Route::TeamDetail(SEOUL_BALLERS_ID));
    assert_ne!(err.fallback, Route::Coaching(game_id));

    assert_eq!(db.game(game_id).unwrap().status, GameStatus::Finished);
    let records = db.game_records(SEOUL_BALLERS_ID).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].game_id, game_id);
}

#[tokio::test]
async fn second_submission_for_the_same_game_conflicts_and_keeps_the_first() {
    let app = spawn_app().await;
    login_as(&app.api, SEOUL_CAPTAIN_EMAIL).await;
    let game_id = schedule_game(&app.api).await;

    let submission = FeedbackSubmission {
        game_id,
        team_id: SEOUL_BALLERS_ID,
        opponent_name: "Busan Blockers".to_string(),
        result: GameResult::Lose,
        answers: all_positions(Answer::Negative),
    };
    submit_feedback(&app.api, &submission).await.unwrap();

    let err = submit_feedback(&app.api, &submission).await.unwrap_err();
    assert_eq!(err.error.status(), Some(409));
    assert_eq!(app.api.coaching().game_records(SEOUL_BALLERS_ID).await.unwrap().len(), 1);
}

#[tokio::test]
async fn unanswered_questions_are_skipped() {
    let mut sheet = AnswerSheet::new();
    sheet.insert("q1".to_string(), "Not a real option".to_string());

    assert!(map_feedback_tags(Position::PointGuard, &sheet).is_empty());
    assert!(map_feedback_tags(Position::Center, &AnswerSheet::new()).is_empty());
}
