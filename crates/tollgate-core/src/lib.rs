//! # tollgate-core — Decision Core for the Tollgate Request Gate
//!
//! Pure ingredients of the gating decision: validated gate options,
//! route-exemption path patterns, and authorization-credential parsing.
//! Everything in this crate is a total function of its inputs — no I/O,
//! no async, no ambient state — which is what keeps the per-request
//! decision independently testable.
//!
//! The decision itself is assembled elsewhere: `tollgate-axum` feeds the
//! request path and authorization header through these types and delegates
//! token validation to a `tollgate-authority-client` transport.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tollgate-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod credential;
pub mod options;
pub mod pattern;

// Re-export primary types for ergonomic imports.
pub use credential::{bearer_token, parse_credential_list, Credential};
pub use options::{GateOptions, GateOptionsBuilder, OptionsError, RawGateOptions};
pub use pattern::PathPattern;
