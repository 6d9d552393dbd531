//! # HTTP Transport to the Validation Authority
//!
//! Production implementation of [`TokenAuthority`]: one `reqwest::Client`
//! reused across requests, structured URL construction through `url::Url`
//! (the token is escaped by the query serializer, never string-joined), and
//! the strict 200-vs-other verdict mapping.
//!
//! ## Deadlines
//!
//! No request deadline is applied unless `timeout_secs` is set — the gate
//! historically imposes none, and inventing a default would change
//! observable behavior under a slow authority. Deployments that want one
//! opt in through the configuration.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::authority::{AuthorityError, TokenAuthority, TokenVerdict};

/// Configuration for the HTTP authority transport.
#[derive(Debug, Clone)]
pub struct AuthorityConfig {
    /// Address of the validation endpoint
    /// (e.g. `http://localhost:3000/oauth/tokenvalidation`).
    pub validation_uri: String,
    /// Query-parameter name the token is sent under.
    pub token_param: String,
    /// Optional request deadline in seconds (default: none).
    pub timeout_secs: Option<u64>,
}

impl AuthorityConfig {
    /// Create a configuration with no request deadline.
    pub fn new(validation_uri: impl Into<String>, token_param: impl Into<String>) -> Self {
        Self {
            validation_uri: validation_uri.into(),
            token_param: token_param.into(),
            timeout_secs: None,
        }
    }
}

/// Live HTTP transport to the token-validation authority.
///
/// Issues one GET per check to
/// `<validation_uri>?<token_param>=<token>` and maps the answer to a
/// [`TokenVerdict`]. Cheap to share behind an `Arc`; the inner client pools
/// connections across concurrent checks.
#[derive(Debug)]
pub struct HttpTokenAuthority {
    client: reqwest::Client,
    base: Url,
    token_param: String,
    timeout: Option<Duration>,
}

impl HttpTokenAuthority {
    /// Build the transport from configuration.
    ///
    /// The validation URI is parsed here, once — an unparseable address is
    /// a construction failure, not a per-request one.
    pub fn new(config: AuthorityConfig) -> Result<Self, AuthorityError> {
        let base = Url::parse(&config.validation_uri).map_err(|e| AuthorityError::InvalidUri {
            uri: config.validation_uri.clone(),
            reason: e.to_string(),
        })?;

        let timeout = config.timeout_secs.map(Duration::from_secs);
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| AuthorityError::NotConfigured {
            reason: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            base,
            token_param: config.token_param,
            timeout,
        })
    }

    /// The validation URL for one token: the configured endpoint with
    /// `<token_param>=<token>` appended to its query. Query pairs already
    /// present on the configured URI are preserved.
    fn validation_url(&self, token: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair(&self.token_param, token);
        url
    }

    fn timeout_millis(&self) -> u64 {
        self.timeout.map(|t| t.as_millis() as u64).unwrap_or_default()
    }
}

#[async_trait]
impl TokenAuthority for HttpTokenAuthority {
    async fn check_token(&self, token: &str) -> Result<TokenVerdict, AuthorityError> {
        let url = self.validation_url(token);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AuthorityError::Timeout {
                    elapsed_ms: self.timeout_millis(),
                }
            } else {
                // The request URL carries the token; strip it from the error
                // text so credential material never reaches logs.
                AuthorityError::Unreachable {
                    reason: format!("GET {}: {}", self.base, e.without_url()),
                }
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            tracing::debug!(authority = %self.base, "token accepted by validation authority");
            Ok(TokenVerdict::Accepted)
        } else {
            tracing::debug!(
                authority = %self.base,
                status = status.as_u16(),
                "token rejected by validation authority"
            );
            Ok(TokenVerdict::Rejected {
                status: status.as_u16(),
            })
        }
    }

    fn authority_name(&self) -> &str {
        "HttpTokenAuthority"
    }
}
