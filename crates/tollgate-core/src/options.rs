//! # Gate Options
//!
//! Construction-time configuration for the request gate. Options arrive as a
//! [`RawGateOptions`] document (every field optional — the shape a JSON
//! config or programmatic caller produces) and are validated exactly once
//! into an immutable [`GateOptions`]. A gate instance with missing required
//! fields is never constructed: validation failures are reported through
//! [`OptionsError`] before any request can be processed.
//!
//! The `Display` renderings of [`OptionsError`] are stable contract text —
//! operators and embedding applications match on them — so they are asserted
//! verbatim in tests and must not be reworded casually.

use serde::Deserialize;

use crate::pattern::PathPattern;

// ── Raw document ────────────────────────────────────────────────────────────

/// Options document as it arrives from configuration, before validation.
///
/// Deserializes from camelCase keys (`validationUri`, `tokenParam`,
/// `unprotectedPatterns`); `tokenParamName` is accepted as an alias for
/// `tokenParam`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGateOptions {
    /// Base address of the external token-validation authority.
    pub validation_uri: Option<String>,
    /// Name of the query parameter under which the token is sent upstream.
    #[serde(alias = "tokenParamName")]
    pub token_param: Option<String>,
    /// Path patterns exempt from validation, in priority order.
    pub unprotected_patterns: Option<Vec<String>>,
}

// ── Validation errors ───────────────────────────────────────────────────────

/// Construction failures for [`GateOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    /// No options document was supplied at all.
    #[error("Options are missing.")]
    Missing,
    /// The document has no `validationUri`.
    #[error("validationUri option is missing.")]
    MissingValidationUri,
    /// The document has no `tokenParam`.
    #[error("tokenParam option is missing.")]
    MissingTokenParam,
}

// ── Validated options ───────────────────────────────────────────────────────

/// Validated, immutable gate configuration.
///
/// Holds the validation authority address, the query-parameter name the
/// token travels under, and the parsed exemption patterns. Constructed via
/// [`GateOptions::from_raw`] or [`GateOptions::builder`]; both funnel
/// through the same validation, so the invariant holds regardless of entry
/// point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOptions {
    validation_uri: String,
    token_param: String,
    unprotected: Vec<PathPattern>,
}

impl GateOptions {
    /// Start a builder. An empty builder behaves like an empty document:
    /// `build` reports the first missing required field.
    pub fn builder() -> GateOptionsBuilder {
        GateOptionsBuilder::default()
    }

    /// Validate a raw options document.
    ///
    /// `None` is the whole-document-absent case. `validationUri` is checked
    /// before `tokenParam`, so a document missing both reports the
    /// `validationUri` failure.
    pub fn from_raw(raw: Option<RawGateOptions>) -> Result<Self, OptionsError> {
        let raw = raw.ok_or(OptionsError::Missing)?;
        let validation_uri = raw
            .validation_uri
            .ok_or(OptionsError::MissingValidationUri)?;
        let token_param = raw.token_param.ok_or(OptionsError::MissingTokenParam)?;
        let unprotected = raw
            .unprotected_patterns
            .unwrap_or_default()
            .iter()
            .map(|pattern| PathPattern::parse(pattern))
            .collect();

        Ok(Self {
            validation_uri,
            token_param,
            unprotected,
        })
    }

    /// Base address of the token-validation authority.
    pub fn validation_uri(&self) -> &str {
        &self.validation_uri
    }

    /// Query-parameter name the token is sent under.
    pub fn token_param(&self) -> &str {
        &self.token_param
    }

    /// The configured exemption patterns, in configuration order.
    pub fn unprotected_patterns(&self) -> &[PathPattern] {
        &self.unprotected
    }

    /// Whether `path` is exempt from authorization.
    ///
    /// Any `?query` or `#fragment` suffix is stripped before matching, so
    /// `/public/0815?id=1` is classified by its pathname `/public/0815`.
    /// Patterns are tried in configuration order and the scan stops at the
    /// first hit. With no configured patterns nothing is exempt.
    pub fn is_unprotected(&self, path: &str) -> bool {
        let pathname = strip_query(path);
        self.unprotected
            .iter()
            .any(|pattern| pattern.matches(pathname))
    }
}

/// Strip a `?query` or `#fragment` suffix, leaving the pathname only.
fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    }
}

// ── Builder ─────────────────────────────────────────────────────────────────

/// Fluent construction for [`GateOptions`].
#[derive(Debug, Clone, Default)]
pub struct GateOptionsBuilder {
    validation_uri: Option<String>,
    token_param: Option<String>,
    unprotected: Vec<String>,
}

impl GateOptionsBuilder {
    /// Set the validation authority address.
    pub fn validation_uri(mut self, uri: impl Into<String>) -> Self {
        self.validation_uri = Some(uri.into());
        self
    }

    /// Set the query-parameter name the token is sent under.
    pub fn token_param(mut self, name: impl Into<String>) -> Self {
        self.token_param = Some(name.into());
        self
    }

    /// Append one exemption pattern.
    pub fn unprotect(mut self, pattern: impl Into<String>) -> Self {
        self.unprotected.push(pattern.into());
        self
    }

    /// Append several exemption patterns.
    pub fn unprotected<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unprotected.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Validate and produce the immutable options.
    pub fn build(self) -> Result<GateOptions, OptionsError> {
        GateOptions::from_raw(Some(RawGateOptions {
            validation_uri: self.validation_uri,
            token_param: self.token_param,
            unprotected_patterns: if self.unprotected.is_empty() {
                None
            } else {
                Some(self.unprotected)
            },
        }))
    }
}
