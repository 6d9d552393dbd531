//! # Authorization-Credential Parsing
//!
//! An authorization header may carry several credentials on one line,
//! separated by the literal `", "` (comma-space):
//!
//! ```text
//! Authorization: bearer dG9rZW4, policy cG9saWN5dG9rZW4
//! ```
//!
//! [`parse_credential_list`] splits the header into `(scheme, value)` pairs
//! and [`bearer_token`] selects the first `bearer`-scheme credential. The
//! scheme keyword is compared case-insensitively and by full equality — a
//! scheme merely prefixed by `bearer` does not qualify. The value keeps its
//! exact bytes: for a well-formed `bearer <token>` credential the selected
//! value is precisely the text after the 7-character `"bearer "` prefix.
//!
//! Parsing is total and never faults on malformed input; a header with no
//! qualifying credential simply yields `None`, which the gate resolves to a
//! 401 rather than a crash.

/// Separator between credentials on a multi-credential header line.
///
/// The split is on the literal two-character sequence — a bare comma with no
/// following space does not separate credentials.
const CREDENTIAL_SEPARATOR: &str = ", ";

/// Scheme keyword selecting the credential this gate validates.
const BEARER_SCHEME: &str = "bearer";

/// One `(scheme, value)` pair borrowed from an authorization header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credential<'a> {
    /// Text before the first space — the whole candidate when no space
    /// exists.
    pub scheme: &'a str,
    /// Text after the first space — empty when the candidate has no value.
    pub value: &'a str,
}

/// Split a header value into its credentials.
///
/// Each candidate is divided at its first space into scheme and value; a
/// candidate without a space is a scheme with an empty value. Every input
/// produces at least one candidate (the empty header parses to one empty
/// credential).
pub fn parse_credential_list(header: &str) -> Vec<Credential<'_>> {
    header
        .split(CREDENTIAL_SEPARATOR)
        .map(|candidate| match candidate.split_once(' ') {
            Some((scheme, value)) => Credential { scheme, value },
            None => Credential {
                scheme: candidate,
                value: "",
            },
        })
        .collect()
}

/// The value of the first `bearer`-scheme credential on the header.
///
/// Returns `None` when no credential uses the scheme — the caller treats
/// that as an unauthorized request, never as a fault.
pub fn bearer_token(header: &str) -> Option<&str> {
    parse_credential_list(header)
        .into_iter()
        .find(|credential| credential.scheme.eq_ignore_ascii_case(BEARER_SCHEME))
        .map(|credential| credential.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_credential_list ───────────────────────────────────────

    #[test]
    fn single_credential_splits_on_first_space() {
        let parsed = parse_credential_list("bearer abc123");
        assert_eq!(
            parsed,
            vec![Credential {
                scheme: "bearer",
                value: "abc123"
            }]
        );
    }

    #[test]
    fn multiple_credentials_split_on_comma_space() {
        let parsed = parse_credential_list("bearer token, policy policytoken");
        assert_eq!(
            parsed,
            vec![
                Credential {
                    scheme: "bearer",
                    value: "token"
                },
                Credential {
                    scheme: "policy",
                    value: "policytoken"
                },
            ]
        );
    }

    #[test]
    fn bare_comma_does_not_separate() {
        // Only the literal ", " separates credentials; "a,b" stays one
        // candidate whose value happens to contain a comma.
        let parsed = parse_credential_list("bearer a,policy b");
        assert_eq!(
            parsed,
            vec![Credential {
                scheme: "bearer",
                value: "a,policy b"
            }]
        );
    }

    #[test]
    fn candidate_without_space_is_scheme_only() {
        let parsed = parse_credential_list("bearer");
        assert_eq!(
            parsed,
            vec![Credential {
                scheme: "bearer",
                value: ""
            }]
        );
    }

    #[test]
    fn empty_header_parses_to_one_empty_credential() {
        let parsed = parse_credential_list("");
        assert_eq!(
            parsed,
            vec![Credential {
                scheme: "",
                value: ""
            }]
        );
    }

    #[test]
    fn value_keeps_exact_bytes() {
        // Double space: the value starts with the second space.
        let parsed = parse_credential_list("bearer  padded");
        assert_eq!(parsed[0].value, " padded");
    }

    // ── bearer_token ────────────────────────────────────────────────

    #[test]
    fn selects_single_bearer_credential() {
        assert_eq!(bearer_token("bearer abc123"), Some("abc123"));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(bearer_token("BEARER abc123"), Some("abc123"));
        assert_eq!(bearer_token("bEaReR abc123"), Some("abc123"));
    }

    #[test]
    fn value_case_is_preserved() {
        assert_eq!(bearer_token("BEARER AbC123"), Some("AbC123"));
    }

    #[test]
    fn selects_bearer_among_multiple_credentials() {
        assert_eq!(
            bearer_token("bearer token, policy policytoken"),
            Some("token")
        );
        assert_eq!(
            bearer_token("policy policytoken, bearer token"),
            Some("token")
        );
    }

    #[test]
    fn first_bearer_wins() {
        assert_eq!(bearer_token("bearer one, bearer two"), Some("one"));
    }

    #[test]
    fn no_bearer_credential_yields_none() {
        assert_eq!(bearer_token("basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("policy a, mac b"), None);
        assert_eq!(bearer_token(""), None);
    }

    #[test]
    fn scheme_equality_is_not_prefix_matching() {
        assert_eq!(bearer_token("bearertoken abc"), None);
        assert_eq!(bearer_token("bearers abc"), None);
    }

    #[test]
    fn bearer_without_value_yields_empty_token() {
        // A lone scheme keyword still selects; the empty token is validated
        // upstream like any other and rejected there.
        assert_eq!(bearer_token("bearer"), Some(""));
        assert_eq!(bearer_token("bearer, policy p"), Some(""));
    }
}
