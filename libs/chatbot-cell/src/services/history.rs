use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Local;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::JsonFileStore;

use crate::models::{ChatError, ChatRecord};

pub const HISTORY_FILE: &str = "chat_history.json";
pub const MAX_RECORDS_PER_USER: usize = 50;
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

type HistoryDocument = HashMap<String, Vec<ChatRecord>>;

/// Per-user conversation log.
#[async_trait]
pub trait ChatHistoryStore: Send + Sync {
    async fn append(&self, user_id: &str, record: ChatRecord) -> Result<(), ChatError>;

    /// Up to `limit` most recent records, oldest first.
    async fn recent(&self, user_id: &str, limit: usize) -> Result<Vec<ChatRecord>, ChatError>;
}

pub struct JsonChatHistoryStore {
    store: JsonFileStore,
    max_records: usize,
}

impl JsonChatHistoryStore {
    pub fn new(store: JsonFileStore) -> Self {
        Self {
            store,
            max_records: MAX_RECORDS_PER_USER,
        }
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }
}

#[async_trait]
impl ChatHistoryStore for JsonChatHistoryStore {
    async fn append(&self, user_id: &str, record: ChatRecord) -> Result<(), ChatError> {
        let max_records = self.max_records;
        let kept = self
            .store
            .update(|document: &mut HistoryDocument| {
                let records = document.entry(user_id.to_string()).or_default();
                records.push(record);
                if records.len() > max_records {
                    let excess = records.len() - max_records;
                    records.drain(..excess);
                }
                records.len()
            })
            .await?;

        debug!("Stored chat exchange for user {} ({} kept)", user_id, kept);
        Ok(())
    }

    async fn recent(&self, user_id: &str, limit: usize) -> Result<Vec<ChatRecord>, ChatError> {
        let mut document: HistoryDocument = self.store.load().await?;
        let records = document.remove(user_id).unwrap_or_default();

        let skip = records.len().saturating_sub(limit);
        Ok(records.into_iter().skip(skip).collect())
    }
}

pub struct ChatHistoryService {
    store: Box<dyn ChatHistoryStore>,
}

impl ChatHistoryService {
    pub fn new(config: &AppConfig) -> Self {
        let store = JsonFileStore::new(config.data_file(HISTORY_FILE));
        Self::with_store(Box::new(JsonChatHistoryStore::new(store)))
    }

    pub fn with_store(store: Box<dyn ChatHistoryStore>) -> Self {
        Self { store }
    }

    /// Timestamps the exchange with local time and logs it.
    pub async fn record(&self, user_id: &str, query: &str, response: &str) -> Result<ChatRecord, ChatError> {
        let record = ChatRecord {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            query: query.to_string(),
            response: response.to_string(),
        };

        self.store.append(user_id, record.clone()).await?;
        Ok(record)
    }

    pub async fn recent(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<ChatRecord>, ChatError> {
        self.store
            .recent(user_id, limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(query: &str) -> ChatRecord {
        ChatRecord {
            timestamp: "2024-01-01 10:00:00".to_string(),
            query: query.to_string(),
            response: format!("answer to {}", query),
        }
    }

    #[tokio::test]
    async fn test_recent_returns_tail_in_order() {
        let dir = tempdir().unwrap();
        let store = JsonChatHistoryStore::new(JsonFileStore::new(dir.path().join(HISTORY_FILE)));

        for query in ["one", "two", "three"] {
            store.append("user-1", record(query)).await.unwrap();
        }

        let recent = store.recent("user-1", 2).await.unwrap();
        let queries: Vec<&str> = recent.iter().map(|r| r.query.as_str()).collect();
        assert_eq!(queries, vec!["two", "three"]);

        assert!(store.recent("someone-else", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_caps_records() {
        let dir = tempdir().unwrap();
        let store = JsonChatHistoryStore::new(JsonFileStore::new(dir.path().join(HISTORY_FILE)))
            .with_max_records(3);

        for i in 0..5 {
            store.append("user-1", record(&format!("q{}", i))).await.unwrap();
        }

        let all = store.recent("user-1", 100).await.unwrap();
        let queries: Vec<&str> = all.iter().map(|r| r.query.as_str()).collect();
        assert_eq!(queries, vec!["q2", "q3", "q4"]);
    }

    #[tokio::test]
    async fn test_default_cap_keeps_newest_fifty() {
        let dir = tempdir().unwrap();
        let store = JsonChatHistoryStore::new(JsonFileStore::new(dir.path().join(HISTORY_FILE)));

        for i in 0..MAX_RECORDS_PER_USER + 5 {
            store.append("user-1", record(&format!("q{}", i))).await.unwrap();
        }

        let all = store.recent("user-1", 100).await.unwrap();
        assert_eq!(all.len(), MAX_RECORDS_PER_USER);
        assert_eq!(all[0].query, "q5");
        assert_eq!(all[MAX_RECORDS_PER_USER - 1].query, "q54");
    }

    #[tokio::test]
    async fn test_zero_limit_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonChatHistoryStore::new(JsonFileStore::new(dir.path().join(HISTORY_FILE)));
        store.append("user-1", record("one")).await.unwrap();

        assert!(store.recent("user-1", 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_service_defaults_to_ten() {
        let dir = tempdir().unwrap();
        let store = JsonChatHistoryStore::new(JsonFileStore::new(dir.path().join(HISTORY_FILE)));
        for i in 0..15 {
            store.append("user-1", record(&format!("q{}", i))).await.unwrap();
        }
        let service = ChatHistoryService::with_store(Box::new(store));

        let recent = service.recent("user-1", None).await.unwrap();
        assert_eq!(recent.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(recent[0].query, "q5");
        assert_eq!(service.recent("user-1", Some(3)).await.unwrap().len(), 3);
    }
}
