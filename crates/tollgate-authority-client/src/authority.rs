//! # Token Authority Trait
//!
//! Defines the [`TokenAuthority`] transport abstraction plus the verdict and
//! error types shared by every implementation. The live HTTP transport lives
//! in [`crate::http`]; [`StaticTokenAuthority`] here is the in-memory
//! implementation used by tests and development wiring.

use std::collections::HashSet;

use async_trait::async_trait;

/// The authority's answer for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenVerdict {
    /// HTTP 200 — the token is valid.
    Accepted,
    /// Any other HTTP status — the token is not valid.
    Rejected {
        /// Status code the authority answered with.
        status: u16,
    },
}

impl TokenVerdict {
    /// Whether this verdict lets the request through.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Errors from the validation-authority transport.
///
/// `InvalidUri` and `NotConfigured` are construction-time failures; a
/// transport that cannot possibly reach its authority is never handed to
/// the gate. `Unreachable` and `Timeout` are per-request transport
/// failures, which the gate surfaces as a 500.
#[derive(Debug, thiserror::Error)]
pub enum AuthorityError {
    /// The configured validation URI could not be parsed.
    #[error("invalid validation URI `{uri}`: {reason}")]
    InvalidUri {
        /// The URI text as configured.
        uri: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("authority transport not configured: {reason}")]
    NotConfigured {
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The authority could not be reached or did not answer.
    #[error("validation authority unreachable: {reason}")]
    Unreachable {
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The request exceeded the configured deadline.
    #[error("validation request timed out after {elapsed_ms}ms")]
    Timeout {
        /// The configured deadline, in milliseconds.
        elapsed_ms: u64,
    },
}

/// Transport to the external token-validation authority.
///
/// Implementations must be `Send + Sync` so they can be shared across async
/// tasks behind an `Arc`. The trait is object-safe to support runtime
/// transport selection (in-memory vs. live HTTP).
#[async_trait]
pub trait TokenAuthority: Send + Sync {
    /// Check one token with the authority.
    ///
    /// Exactly one round trip per call. `Err` means the authority could not
    /// be consulted at all; a reachable authority that dislikes the token
    /// is a [`TokenVerdict::Rejected`], not an error.
    async fn check_token(&self, token: &str) -> Result<TokenVerdict, AuthorityError>;

    /// Human-readable name of this transport implementation
    /// (e.g. "StaticTokenAuthority", "HttpTokenAuthority").
    fn authority_name(&self) -> &str;
}

/// In-memory token authority for tests and development.
///
/// Accepts exactly the configured tokens and rejects everything else with a
/// fixed 400 verdict, mirroring how the development stub server answers.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthority {
    accepted: HashSet<String>,
}

impl StaticTokenAuthority {
    /// Build an authority accepting the given tokens.
    pub fn new<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted: accepted.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl TokenAuthority for StaticTokenAuthority {
    async fn check_token(&self, token: &str) -> Result<TokenVerdict, AuthorityError> {
        if self.accepted.contains(token) {
            Ok(TokenVerdict::Accepted)
        } else {
            Ok(TokenVerdict::Rejected { status: 400 })
        }
    }

    fn authority_name(&self) -> &str {
        "StaticTokenAuthority"
    }
}
