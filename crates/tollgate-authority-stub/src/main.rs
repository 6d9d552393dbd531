//! Tollgate validation-authority stub — standalone development server.
//!
//! In-memory stand-in for the external token-validation authority the gate
//! middleware calls: `GET /oauth/tokenvalidation?token=<t>` answers 200 when
//! `<t>` is in the accepted set and 400 otherwise, which is exactly the
//! contract `tollgate-authority-client` maps to verdicts. Point a gate's
//! `validationUri` at this process to run an application locally without a
//! real authority.
//!
//! Accepted tokens come from `TOLLGATE_STUB_TOKENS` (comma-separated,
//! default `token`); the port from `TOLLGATE_STUB_PORT` (default 8091).
//! Nothing is persisted.

mod routes;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("TOLLGATE_STUB_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8091);

    let tokens = std::env::var("TOLLGATE_STUB_TOKENS").unwrap_or_else(|_| "token".to_string());
    let state = routes::StubState::from_token_list(&tokens);
    tracing::info!(accepted_tokens = state.accepted_count(), "loaded accepted-token set");

    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("tollgate-authority-stub listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
