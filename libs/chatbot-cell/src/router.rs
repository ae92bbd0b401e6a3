use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::{auth_middleware, optional_auth_middleware};

use crate::handlers;

pub fn chat_routes(state: Arc<AppConfig>) -> Router {
    let public_routes = Router::new()
        .route("/topics", get(handlers::list_topics));

    // Anonymous callers are answered but not logged
    let open_routes = Router::new()
        .route("/", post(handlers::chat))
        .route("/assistant", post(handlers::assistant))
        .layer(middleware::from_fn_with_state(state.clone(), optional_auth_middleware));

    let protected_routes = Router::new()
        .route("/history", get(handlers::get_chat_history))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(open_routes)
        .merge(protected_routes)
        .with_state(state)
}
