use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use chatbot_cell::router::chat_routes;
use shared_config::AppConfig;
use symptom_cell::router::symptom_routes;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "PASMA health portal API is running!" }))
        .nest("/chat", chat_routes(state.clone()))
        .nest("/symptoms", symptom_routes(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use shared_utils::test_utils::TestConfig;

    #[tokio::test]
    async fn test_root_is_up() {
        let response = create_router(TestConfig::default().to_arc())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chat_is_nested() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "message": "bye for now" }).to_string()))
            .unwrap();

        let response = create_router(TestConfig::with_data_dir(dir.path()).to_arc())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["response"].is_string());
    }

    #[tokio::test]
    async fn test_symptoms_are_nested() {
        let response = create_router(TestConfig::default().to_arc())
            .oneshot(Request::builder().uri("/symptoms/vocabulary").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
