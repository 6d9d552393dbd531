//! # tollgate-axum — Request Gate Middleware
//!
//! Per-request bearer-token gating for axum applications. Each inbound
//! request is either forwarded downstream or answered on the spot:
//!
//! 1. **Classify** — paths matching a configured exemption pattern skip
//!    authorization entirely (no header inspection, no upstream call).
//! 2. **Extract** — the first `bearer`-scheme credential is taken from the
//!    authorization header; a missing header or a header without one is an
//!    immediate 401.
//! 3. **Validate** — the token goes to the validation authority through the
//!    configured [`TokenAuthority`] transport: accepted → continue,
//!    rejected → 401, transport failure → 500. Rejections carry empty
//!    bodies; what a 401 looks like beyond that is the embedding
//!    application's business.
//!
//! ## Wiring
//!
//! The gate travels in request extensions, mirroring how the rest of our
//! middleware receives its configuration:
//!
//! ```text
//! let options = GateOptions::builder()
//!     .validation_uri("https://auth.internal/oauth/tokenvalidation")
//!     .token_param("token")
//!     .unprotect("/health")
//!     .unprotect("/public/:id")
//!     .build()?;
//! let gate = TokenGate::from_options(options)?;
//!
//! let app = Router::new()
//!     .route("/orders", get(list_orders))
//!     .layer(middleware::from_fn(token_gate_middleware))
//!     .layer(Extension(gate));
//! ```
//!
//! Tests substitute an in-memory authority via [`TokenGate::new`]; nothing
//! in the middleware knows which transport it is talking to.

use std::fmt;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use tollgate_authority_client::{
    AuthorityConfig, AuthorityError, HttpTokenAuthority, TokenAuthority, TokenVerdict,
};
use tollgate_core::{bearer_token, GateOptions};

// ── Gate handle ─────────────────────────────────────────────────────────────

/// The assembled request gate: validated options plus an authority
/// transport. Cheaply cloneable — clones share the same configuration and
/// transport.
#[derive(Clone)]
pub struct TokenGate {
    options: Arc<GateOptions>,
    authority: Arc<dyn TokenAuthority>,
}

impl TokenGate {
    /// Assemble a gate from options and an explicit authority transport.
    pub fn new(options: GateOptions, authority: Arc<dyn TokenAuthority>) -> Self {
        Self {
            options: Arc::new(options),
            authority,
        }
    }

    /// Assemble a gate whose transport is an [`HttpTokenAuthority`] built
    /// from the options (no request deadline). To set a deadline or any
    /// other transport detail, build the transport yourself and use
    /// [`TokenGate::new`].
    pub fn from_options(options: GateOptions) -> Result<Self, AuthorityError> {
        let config = AuthorityConfig::new(options.validation_uri(), options.token_param());
        let authority = HttpTokenAuthority::new(config)?;
        Ok(Self::new(options, Arc::new(authority)))
    }

    /// The gate's configuration.
    pub fn options(&self) -> &GateOptions {
        &self.options
    }

    /// Run the gating decision for one request.
    ///
    /// Exemption is checked before any header inspection; the authority is
    /// consulted at most once; the continuation runs exactly once on allow
    /// and not at all on deny.
    pub async fn handle(&self, request: Request, next: Next) -> Response {
        let path = request.uri().path();

        if self.options.is_unprotected(path) {
            tracing::debug!(path = %path, "route exempt from authorization");
            return next.run(request).await;
        }

        let header_value = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let token = match header_value {
            Some(header_value) => match bearer_token(header_value) {
                // Owned copy: the borrow must end before the request moves
                // into the continuation.
                Some(token) => token.to_owned(),
                None => {
                    tracing::warn!(
                        path = %path,
                        "request rejected: no bearer credential on authorization header"
                    );
                    return StatusCode::UNAUTHORIZED.into_response();
                }
            },
            None => {
                tracing::warn!(path = %path, "request rejected: missing authorization header");
                return StatusCode::UNAUTHORIZED.into_response();
            }
        };

        match self.authority.check_token(&token).await {
            Ok(TokenVerdict::Accepted) => {
                tracing::debug!(path = %path, "token accepted, continuing downstream");
                next.run(request).await
            }
            Ok(TokenVerdict::Rejected { status }) => {
                tracing::warn!(
                    path = %path,
                    authority_status = status,
                    "request rejected: authority declined token"
                );
                StatusCode::UNAUTHORIZED.into_response()
            }
            Err(err) => {
                tracing::error!(
                    path = %path,
                    authority = self.authority.authority_name(),
                    error = %err,
                    "token validation failed"
                );
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl fmt::Debug for TokenGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGate")
            .field("options", &self.options)
            .field("authority", &self.authority.authority_name())
            .finish()
    }
}

// ── Middleware ──────────────────────────────────────────────────────────────

/// Gate middleware for `axum::middleware::from_fn`.
///
/// Reads the [`TokenGate`] from request extensions. A missing gate is a
/// wiring bug in the embedding application; the middleware fails closed
/// with a 500 rather than letting the request through.
pub async fn token_gate_middleware(request: Request, next: Next) -> Response {
    let gate = request.extensions().get::<TokenGate>().cloned();

    match gate {
        Some(gate) => gate.handle(request, next).await,
        None => {
            tracing::error!(
                "no TokenGate in request extensions — layer Extension(gate) after from_fn(token_gate_middleware)"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
