use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::{auth_middleware, optional_auth_middleware};

use crate::handlers;

pub fn symptom_routes(state: Arc<AppConfig>) -> Router {
    let public_routes = Router::new()
        .route("/vocabulary", get(handlers::list_symptoms));

    let open_routes = Router::new()
        .route("/predict", post(handlers::predict))
        .layer(middleware::from_fn_with_state(state.clone(), optional_auth_middleware));

    let protected_routes = Router::new()
        .route("/history", get(handlers::get_medical_history))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(open_routes)
        .merge(protected_routes)
        .with_state(state)
}
