//! # Route-Exemption Path Patterns
//!
//! A [`PathPattern`] is a `/`-separated sequence of segments, each either a
//! literal (`/health`) or a named placeholder (`/public/:id`). A placeholder
//! matches exactly one non-empty path segment; literals match exactly.
//! Matching is segment-wise — no regular expressions, no backtracking — and
//! operates on the pathname only (callers strip any query string first; see
//! `GateOptions::is_unprotected`).
//!
//! Parsing is total: every string yields a pattern. There is no pattern
//! syntax error to handle, which keeps configuration validation focused on
//! the fields that can actually be absent.

use std::fmt;

/// One parsed segment of a [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matches exactly this text.
    Literal(String),
    /// `:name` — matches any single non-empty segment.
    Placeholder(String),
}

/// A route pattern with literal and `:name` placeholder segments.
///
/// Retains the raw source string for diagnostics; two patterns compare equal
/// when their parsed segments do.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    ///
    /// A segment starting with `:` is a named placeholder; anything else
    /// (including the empty segment) is a literal.
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Placeholder(name.to_string()),
                None => Segment::Literal(segment.to_string()),
            })
            .collect();

        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// The pattern source string as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether `path` (pathname only, no query string) matches this pattern.
    ///
    /// Segment counts must agree, so `/public` does not match `/public/0815`
    /// and a trailing slash is significant in both directions.
    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return false;
        }

        self.segments
            .iter()
            .zip(parts)
            .all(|(segment, part)| match segment {
                Segment::Literal(literal) => literal == part,
                Segment::Placeholder(_) => !part.is_empty(),
            })
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for PathPattern {}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
