//! Tests for raw-URL normalization

use proptest::prelude::*;
use sitesnap::errors::ScrapeError;
use sitesnap::utils::normalize_url;

#[test]
fn test_missing_scheme_gets_https_prefix() {
    let test_cases = vec![
        ("example.com", "https://example.com/"),
        ("example.com/a", "https://example.com/a"),
        ("sub.example.com/a/b?c=1", "https://sub.example.com/a/b?c=1"),
    ];

    for (input, expected) in test_cases {
        let url = normalize_url(input).unwrap();
        assert_eq!(url.as_str(), expected, "normalization mismatch for {input}");
    }
}

#[test]
fn test_explicit_schemes_are_preserved() {
    assert_eq!(normalize_url("http://example.com").unwrap().scheme(), "http");
    assert_eq!(
        normalize_url("https://example.com").unwrap().scheme(),
        "https"
    );
}

#[test]
fn test_non_http_schemes_are_rejected_by_name() {
    let err = normalize_url("ftp://example.com/pub").unwrap_err();
    match err {
        ScrapeError::UnsupportedScheme(scheme) => assert_eq!(scheme, "ftp"),
        other => panic!("expected UnsupportedScheme, got {other:?}"),
    }

    let err = normalize_url("file:///etc/passwd").unwrap_err();
    assert!(matches!(err, ScrapeError::UnsupportedScheme(s) if s == "file"));
}

#[test]
fn test_unparseable_input_is_invalid() {
    for input in ["http://", "https://", "://example.com"] {
        let err = normalize_url(input).unwrap_err();
        assert!(
            matches!(err, ScrapeError::InvalidUrl { .. }),
            "expected InvalidUrl for {input:?}, got {err:?}"
        );
    }
}

#[test]
fn test_error_message_names_the_offending_scheme() {
    let err = normalize_url("gopher://example.com").unwrap_err();
    assert!(err.to_string().contains("gopher"));
}

proptest! {
    /// Any scheme-less input that normalizes successfully got the https
    /// default.
    #[test]
    fn scheme_less_inputs_normalize_to_https(input in "[a-z0-9.-]{1,20}(/[a-z0-9]{0,10}){0,3}") {
        prop_assume!(!input.contains("://"));
        if let Ok(url) = normalize_url(&input) {
            prop_assert_eq!(url.scheme(), "https");
            prop_assert!(url.host_str().is_some());
        }
    }

    /// Normalization is idempotent: feeding the normalized form back in
    /// yields the same URL.
    #[test]
    fn normalization_is_idempotent(input in "[a-z0-9.-]{1,20}(/[a-z0-9]{0,10}){0,3}") {
        if let Ok(url) = normalize_url(&input) {
            let again = normalize_url(url.as_str()).unwrap();
            prop_assert_eq!(url, again);
        }
    }
}
