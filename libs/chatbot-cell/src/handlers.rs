use std::sync::Arc;

use axum::{
    extract::{Extension, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::auth::User;
use shared_models::error::AppError;

use crate::models::{AssistantResponse, ChatRequest, ChatResponse, HistoryQuery, HistoryResponse};
use crate::services::{
    history::ChatHistoryService,
    navigator,
    responder::Responder,
};

// Logging failures never cost the caller their answer.
async fn log_exchange(config: &AppConfig, user: Option<&User>, query: &str, response: &str) {
    let Some(user) = user else {
        return;
    };

    let history = ChatHistoryService::new(config);
    if let Err(e) = history.record(&user.id, query, response).await {
        warn!("Failed to store chat exchange for user {}: {}", user.id, e);
    }
}

pub async fn chat(
    State(state): State<Arc<AppConfig>>,
    user: Option<Extension<User>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let outcome = Responder::builtin().evaluate(&payload.message);
    debug!("Chat answered by {:?} rule, topic {:?}", outcome.kind, outcome.topic);

    let user = user.map(|Extension(user)| user);
    log_exchange(&state, user.as_ref(), &payload.message, outcome.response).await;

    Ok(Json(ChatResponse {
        response: outcome.response.to_string(),
    }))
}

pub async fn assistant(
    State(state): State<Arc<AppConfig>>,
    user: Option<Extension<User>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<AssistantResponse>, AppError> {
    let (topic, response) = navigator::navigate(&payload.message);
    debug!("Assistant routed message to {:?}", topic);

    let user = user.map(|Extension(user)| user);
    log_exchange(&state, user.as_ref(), &payload.message, response).await;

    Ok(Json(AssistantResponse {
        response: response.to_string(),
        topic,
    }))
}

pub async fn get_chat_history(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let history = ChatHistoryService::new(&state)
        .recent(&user.id, query.limit)
        .await?;

    Ok(Json(HistoryResponse {
        success: true,
        history,
    }))
}

pub async fn list_topics() -> Json<Value> {
    let topics: Vec<&str> = Responder::builtin()
        .table()
        .topics()
        .map(|(topic, _)| topic)
        .collect();

    Json(json!({
        "count": topics.len(),
        "topics": topics,
    }))
}
