use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use shared_config::AppConfig;
use shared_models::auth::User;
use shared_models::error::AppError;

use crate::jwt::validate_token;

/// The bearer token of a request, `None` when no Authorization header is sent.
pub fn bearer_token(headers: &HeaderMap) -> Option<Result<&str, AppError>> {
    let auth_header = headers.get(AUTHORIZATION)?;

    let token = auth_header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Auth("Invalid authorization header format".to_string()));

    Some(token)
}

fn authenticate(config: &AppConfig, token: &str) -> Result<User, AppError> {
    validate_token(token, &config.jwt_secret).map_err(|e| AppError::Auth(e.to_string()))
}

// Rejects requests without a valid bearer token.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))??;

    let user = authenticate(&config, token)?;
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

// Lets anonymous requests through; a token that is present must still be valid.
pub async fn optional_auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = match bearer_token(request.headers()) {
        Some(token) => Some(authenticate(&config, token?)?),
        None => None,
    };

    if let Some(user) = user {
        request.extensions_mut().insert(user);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_absent() {
        let headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());
    }

    #[test]
    fn test_bearer_token_present() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers).unwrap().unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_matches!(bearer_token(&headers), Some(Err(AppError::Auth(_))));
    }
}
