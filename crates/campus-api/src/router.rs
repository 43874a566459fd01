use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::storage::UploadDir;
use crate::{accounts, chatbot, connect, guidance, idcard, lost_found, service};

/// Every endpoint plus the read-only upload mounts.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    let api = Router::new()
        .route("/", get(service::root))
        .route("/health", get(service::health))
        .route("/item/lost_item/", post(lost_found::submit_lost_item))
        .route("/item/lost_items/", get(lost_found::list_lost_items))
        .route("/idcard/upload/", post(idcard::upload_id_card))
        .route("/idcard/view_secure/", post(idcard::view_id_card_secure))
        .route("/career/suggest/", post(guidance::suggest_career))
        .route("/college/recommend/", post(guidance::recommend_college))
        .route("/student/register/", post(accounts::register_student))
        .route("/student/login/", post(accounts::login_student))
        .route("/staff/register/", post(accounts::register_staff))
        .route("/staff/login/", post(accounts::login_staff))
        .route("/connect/register_senior/", post(connect::register_senior))
        .route("/connect/request_junior/", post(connect::request_junior))
        .route("/connect/match/", get(connect::match_seniors))
        .route("/chatbot/query", post(chatbot::chatbot_query))
        .with_state(state.clone());

    let mut app = Router::new().merge(api);
    for dir in UploadDir::ALL {
        app = app.nest_service(
            &format!("/{}", dir.name()),
            ServeDir::new(state.storage.dir_path(dir)),
        );
    }

    app.layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
