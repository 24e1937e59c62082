//! HTTP surface for recording sessions and reading statistics.
//!
//! Routes live under `/api`:
//! - `POST /api/game/session`
//! - `GET /api/game/stats`
//! - `GET /api/game/stats/{key}`
//! - `GET /api/game/high-scores`

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use scale_core::model::{HighScore, KeyStats, OverallStats, SessionDraft};
use serde::Serialize;
use services::{StatsError, StatsService};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct ApiState {
    stats: Arc<StatsService>,
}

/// Failure response: logs the cause, returns 500 with a fixed `detail`.
#[derive(Debug)]
pub struct ApiError {
    detail: &'static str,
    source: StatsError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.source, "{}", self.detail);
        let body = serde_json::json!({ "detail": self.detail });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

fn failed(detail: &'static str) -> impl FnOnce(StatsError) -> ApiError {
    move |source| ApiError { detail, source }
}

#[derive(Debug, Serialize)]
pub struct Ack {
    status: &'static str,
    message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HighScoresBody {
    high_scores: Vec<HighScore>,
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Scale Genius API" }))
}

async fn save_game_session(
    State(state): State<ApiState>,
    Json(draft): Json<SessionDraft>,
) -> Result<Json<Ack>, ApiError> {
    let record = state
        .stats
        .record_session(draft)
        .await
        .map_err(failed("Failed to save game session"))?;
    info!(key = %record.key, mode = %record.mode, timer = %record.timer_mode, "game session saved");
    Ok(Json(Ack {
        status: "success",
        message: "Game session saved",
    }))
}

async fn get_overall_stats(State(state): State<ApiState>) -> Result<Json<OverallStats>, ApiError> {
    let stats = state
        .stats
        .overall_stats()
        .await
        .map_err(failed("Failed to fetch stats"))?;
    Ok(Json(stats))
}

async fn get_key_stats(
    State(state): State<ApiState>,
    Path(key): Path<String>,
) -> Result<Json<KeyStats>, ApiError> {
    let stats = state
        .stats
        .key_stats(&key)
        .await
        .map_err(failed("Failed to fetch key stats"))?;
    Ok(Json(stats))
}

async fn get_high_scores(
    State(state): State<ApiState>,
) -> Result<Json<HighScoresBody>, ApiError> {
    let high_scores = state
        .stats
        .high_scores()
        .await
        .map_err(failed("Failed to fetch high scores"))?;
    Ok(Json(HighScoresBody { high_scores }))
}

pub fn router(stats: Arc<StatsService>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/game/session", post(save_game_session))
        .route("/api/game/stats", get(get_overall_stats))
        .route("/api/game/stats/{key}", get(get_key_stats))
        .route("/api/game/high-scores", get(get_high_scores))
        .layer(cors)
        .with_state(ApiState { stats })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}

/// Serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the server loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
