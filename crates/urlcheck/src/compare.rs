use std::collections::HashMap;

use url::Url;

use crate::error::UrlCompareError;

fn parse(raw: &str) -> Result<Url, UrlCompareError> {
    Url::parse(raw).map_err(|source| UrlCompareError::Malformed {
        url: raw.to_string(),
        source,
    })
}

fn trim_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Decide whether `query_url` and `candidate_url` denote the same resource.
///
/// Checks, in order:
/// - hosts must be identical as parsed,
/// - paths must be identical after dropping one trailing `/` from each,
/// - every query parameter (name, value) of `query_url` must appear on
///   `candidate_url`; repeated names keep all their values, and parameters
///   present only on the candidate side are ignored.
///
/// The parameter check makes the relation directional: a query link without
/// tracking parameters still matches the candidate's decorated copy of the
/// same link, but not the other way around. Call with the query-side URL
/// first.
///
/// # Errors
///
/// [`UrlCompareError::Malformed`] when either side fails to parse. The error
/// covers this one comparison only.
///
/// # Examples
///
/// ```rust
/// use urlcheck::equivalent;
///
/// assert!(equivalent("https://x.com/a?p=1", "https://x.com/a/?p=1&p=2").unwrap());
/// assert!(!equivalent("https://x.com/a", "https://y.com/a").unwrap());
/// ```
pub fn equivalent(query_url: &str, candidate_url: &str) -> Result<bool, UrlCompareError> {
    let query = parse(query_url)?;
    let candidate = parse(candidate_url)?;

    if query.host_str() != candidate.host_str() {
        return Ok(false);
    }
    if trim_trailing_slash(query.path()) != trim_trailing_slash(candidate.path()) {
        return Ok(false);
    }

    let mut candidate_params: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in candidate.query_pairs() {
        candidate_params
            .entry(name.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    for (name, value) in query.query_pairs() {
        let found = candidate_params
            .get(name.as_ref())
            .is_some_and(|values| values.iter().any(|v| v == value.as_ref()));
        if !found {
            return Ok(false);
        }
    }

    Ok(true)
}

/// True iff at least one of `candidate_urls` is [`equivalent`] to at least
/// one of `query_urls` (query URL passed as the query side).
///
/// A malformed URL skips that one pairing; it never aborts the scan. The
/// skip is logged at debug level so bad links in stored articles stay
/// diagnosable.
pub fn exists_equivalent(candidate_urls: &[String], query_urls: &[String]) -> bool {
    for query_url in query_urls {
        for candidate_url in candidate_urls {
            match equivalent(query_url, candidate_url) {
                Ok(true) => return true,
                Ok(false) => {}
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unparseable url pairing");
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_url_is_equivalent_to_itself() {
        for u in [
            "https://example.com/",
            "https://example.com/a/b?x=1&y=2",
            "http://example.com:8080/path?q=%E8%AC%A0",
        ] {
            assert!(equivalent(u, u).unwrap(), "{u} should match itself");
        }
    }

    #[test]
    fn trailing_slash_and_extra_candidate_params_are_ignored() {
        assert!(equivalent("https://x.com/a?p=1", "https://x.com/a/?p=1&p=2").unwrap());
    }

    #[test]
    fn host_mismatch_is_not_equivalent() {
        assert!(!equivalent("https://x.com/a", "https://y.com/a").unwrap());
    }

    #[test]
    fn path_mismatch_is_not_equivalent() {
        assert!(!equivalent("https://x.com/a/b", "https://x.com/a").unwrap());
    }

    #[test]
    fn missing_query_value_is_not_equivalent() {
        assert!(!equivalent("https://x.com/a?p=1&p=2", "https://x.com/a?p=1").unwrap());
        assert!(!equivalent("https://x.com/a?p=1", "https://x.com/a?p=9").unwrap());
    }

    #[test]
    fn repeated_params_keep_all_values() {
        assert!(equivalent(
            "https://x.com/a?p=1&p=2",
            "https://x.com/a?p=2&p=3&p=1"
        )
        .unwrap());
    }

    #[test]
    fn directionality_is_as_documented() {
        let plain = "https://x.com/a?p=1";
        let decorated = "https://x.com/a?p=1&utm_source=feed";
        assert!(equivalent(plain, decorated).unwrap());
        assert!(!equivalent(decorated, plain).unwrap());
    }

    #[test]
    fn malformed_url_is_a_recoverable_error() {
        let err = equivalent("not a url at all", "https://x.com/").unwrap_err();
        match err {
            UrlCompareError::Malformed { url, .. } => assert_eq!(url, "not a url at all"),
        }
    }

    #[test]
    fn exists_equivalent_finds_a_cross_pairing() {
        let candidates = vec![
            "https://a.example/one".to_string(),
            "https://b.example/two?id=7&ref=x".to_string(),
        ];
        let query = vec!["https://b.example/two/?id=7".to_string()];
        assert!(exists_equivalent(&candidates, &query));
    }

    #[test]
    fn exists_equivalent_skips_malformed_urls() {
        let candidates = vec![
            "::::".to_string(),
            "https://ok.example/page".to_string(),
        ];
        let query = vec![
            "also bad".to_string(),
            "https://ok.example/page".to_string(),
        ];
        assert!(exists_equivalent(&candidates, &query));
    }

    #[test]
    fn exists_equivalent_with_no_match_is_false() {
        let candidates = vec!["https://a.example/".to_string()];
        let query = vec!["https://b.example/".to_string()];
        assert!(!exists_equivalent(&candidates, &query));
    }

    #[test]
    fn empty_sides_never_match() {
        assert!(!exists_equivalent(&[], &["https://a.example/".to_string()]));
        assert!(!exists_equivalent(&["https://a.example/".to_string()], &[]));
    }
}
