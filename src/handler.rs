use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{Response, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use futures::StreamExt;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, info};

use crate::models::chat::{ChatRequest, ModelInfo};
use crate::pipeline::{PIPELINE_MODEL_ID, PIPELINE_MODEL_NAME, PipeOptions, TranslatePipeline};
use crate::state::ValvesUpdate;
use crate::transform::extract_user_text;

pub struct AppState {
    pub pipeline: TranslatePipeline,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/v1/models", get(list_models))
        .route(
            "/v1/chat/completions",
            axum::routing::post(handle_chat_completions),
        )
        .route("/v1/valves", get(get_valves).post(update_valves))
        .with_state(state)
}

pub async fn list_models() -> impl IntoResponse {
    let models = vec![ModelInfo {
        id: PIPELINE_MODEL_ID.to_string(),
        name: PIPELINE_MODEL_NAME.to_string(),
        object: "model".to_string(),
    }];
    Json(serde_json::json!({
        "object": "list",
        "data": models,
    }))
}

pub async fn handle_chat_completions(
    State(state): State<Arc<AppState>>,
    Json(chat_req): Json<ChatRequest>,
) -> impl IntoResponse {
    let user_text = match extract_user_text(&chat_req) {
        Ok(text) => text,
        Err(e) => {
            error!("Validation failed: {}", e);
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    info!(
        model = %chat_req.model,
        chars = user_text.chars().count(),
        "Translation request"
    );

    let options = PipeOptions {
        target_lang: chat_req.target_lang.clone(),
    };
    let sse_stream = state
        .pipeline
        .pipe(&user_text, &chat_req.model, &chat_req.messages, &options)
        .map(Ok::<_, Infallible>);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .body(Body::from_stream(sse_stream))
        .map(IntoResponse::into_response)
        .unwrap_or_else(|e| {
            error!("Failed to build response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}

pub async fn get_valves(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.pipeline.valves().load().masked())
}

pub async fn update_valves(
    State(state): State<Arc<AppState>>,
    Json(update): Json<ValvesUpdate>,
) -> impl IntoResponse {
    match state.pipeline.valves().update(update) {
        Ok(valves) => Json(valves.masked()).into_response(),
        Err(e) => {
            error!("Valves update rejected: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
