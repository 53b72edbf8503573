use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use mvpcoach_core::CoachRequest;
use mvpcoach_service::{CoachService, ServiceError};
use serde_json::{json, Value};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/coach/", post(coach))
}

async fn coach(
    State(state): State<AppState>,
    Json(input): Json<CoachRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    state
        .service
        .advance(&input)
        .await
        .map(|r| Json(json!(r)))
        .map_err(to_error)
}

fn to_error(e: ServiceError) -> (StatusCode, Json<Value>) {
    let (status, msg) = match &e {
        ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        ServiceError::InvalidInput(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        ServiceError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": msg })))
}
