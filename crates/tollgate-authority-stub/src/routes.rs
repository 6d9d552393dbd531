//! Route definitions for the validation-authority stub.
//!
//! One endpoint carries the whole contract: `GET /oauth/tokenvalidation`
//! with the token under the `token` query key, answering 200 or 400 with
//! empty bodies. `/health` exists for liveness probes; anything else is a
//! 404.

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Shared stub state: the set of tokens the authority accepts.
///
/// Cheaply cloneable via `Arc` — all clones share the same set.
#[derive(Debug, Clone)]
pub struct StubState {
    accepted: Arc<HashSet<String>>,
}

impl StubState {
    /// Parse a comma-separated token list (whitespace around entries is
    /// trimmed, empty entries dropped).
    pub fn from_token_list(list: &str) -> Self {
        let accepted = list
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            accepted: Arc::new(accepted),
        }
    }

    /// Number of accepted tokens.
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    fn accepts(&self, token: &str) -> bool {
        self.accepted.contains(token)
    }
}

/// Build the stub router.
pub fn router(state: StubState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/oauth/tokenvalidation", get(validate_token))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────

async fn health() -> StatusCode {
    StatusCode::OK
}

// ── Token validation ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ValidationQuery {
    token: Option<String>,
}

/// 200 when the token is in the accepted set, 400 otherwise (including a
/// missing or empty `token` parameter). Bodies stay empty — callers look
/// only at the status.
async fn validate_token(
    State(state): State<StubState>,
    Query(query): Query<ValidationQuery>,
) -> StatusCode {
    match query.token.as_deref() {
        Some(token) if state.accepts(token) => {
            tracing::debug!("token accepted");
            StatusCode::OK
        }
        Some(_) => {
            tracing::debug!("token declined");
            StatusCode::BAD_REQUEST
        }
        None => {
            tracing::debug!("validation request without token parameter");
            StatusCode::BAD_REQUEST
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        router(StubState::from_token_list("token, second-token"))
    }

    #[tokio::test]
    async fn health_returns_200() {
        let app = test_app();
        let req = axum::http::Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn accepted_token_returns_200_with_empty_body() {
        let app = test_app();
        let req = axum::http::Request::builder()
            .uri("/oauth/tokenvalidation?token=token")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn second_accepted_token_returns_200() {
        let app = test_app();
        let req = axum::http::Request::builder()
            .uri("/oauth/tokenvalidation?token=second-token")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_token_returns_400() {
        let app = test_app();
        let req = axum::http::Request::builder()
            .uri("/oauth/tokenvalidation?token=invalid-token")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_token_parameter_returns_400() {
        let app = test_app();
        let req = axum::http::Request::builder()
            .uri("/oauth/tokenvalidation")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_path_returns_404() {
        let app = test_app();
        let req = axum::http::Request::builder()
            .uri("/oauth/other")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn token_list_parsing_trims_and_drops_empties() {
        let state = StubState::from_token_list(" a ,, b ,");
        assert_eq!(state.accepted_count(), 2);
        assert!(state.accepts("a"));
        assert!(state.accepts("b"));
        assert!(!state.accepts(""));
    }
}
