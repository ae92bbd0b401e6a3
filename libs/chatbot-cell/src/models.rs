use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

use crate::services::navigator::NavigationTopic;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub response: String,
    pub topic: NavigationTopic,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<ChatRecord>,
}

/// One question/answer exchange as kept in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub timestamp: String,
    pub query: String,
    pub response: String,
}

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Chat history storage failed: {0}")]
    Storage(String),

    #[error("Topic appears more than once: {0}")]
    DuplicateTopic(String),

    #[error("Response table is missing reserved key: {0}")]
    MissingReserved(String),
}

impl From<anyhow::Error> for ChatError {
    fn from(e: anyhow::Error) -> Self {
        ChatError::Storage(format!("{:#}", e))
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Storage(msg) => AppError::Storage(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}
