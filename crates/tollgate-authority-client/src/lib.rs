//! # tollgate-authority-client — Validation Authority Transport
//!
//! The outbound half of the tollgate request gate. The [`TokenAuthority`]
//! trait abstracts the external token-validation authority behind an
//! injectable transport: production wires the live HTTP implementation,
//! tests substitute an in-memory one without binding a network port, and
//! the gate itself never knows the difference.
//!
//! ## Contract
//!
//! One token check is one round trip. The authority's HTTP status is mapped
//! strictly: 200 means [`TokenVerdict::Accepted`], anything else means
//! [`TokenVerdict::Rejected`], and a transport-level failure is an
//! [`AuthorityError`] — three distinct answers the gate translates into
//! continue / 401 / 500. No retries, no caching, no backoff.

pub mod authority;
pub mod http;

// Re-export primary types for ergonomic imports.
pub use authority::{AuthorityError, StaticTokenAuthority, TokenAuthority, TokenVerdict};
pub use http::{AuthorityConfig, HttpTokenAuthority};
