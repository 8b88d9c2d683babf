use claimcheck::{match_candidates, MatchCandidate, MatchConfig, MatchError};

fn candidate(text: &str, urls: &[&str]) -> MatchCandidate {
    MatchCandidate::new(text, urls.iter().map(|u| u.to_string()).collect())
}

#[test]
fn empty_query_without_urls_is_rejected_up_front() {
    let mut candidates = vec![candidate("some article", &[])];

    let result = match_candidates("", &[], &mut candidates, &MatchConfig::default());
    assert_eq!(result, Err(MatchError::EmptyQuery));
    assert!(!candidates[0].is_match, "no candidate was annotated");
}

#[test]
fn one_malformed_candidate_url_does_not_abort_the_batch() {
    let query_urls = vec!["https://example.com/story?id=4".to_string()];
    let mut candidates = vec![
        // First URL is garbage; the second is equivalent.
        candidate("", &["::not::a::url::", "https://example.com/story/?id=4&page=2"]),
        candidate("", &["https://unrelated.example/"]),
    ];

    match_candidates("", &query_urls, &mut candidates, &MatchConfig::default())
        .expect("url branch tolerates malformed urls");

    assert!(candidates[0].is_match);
    assert!(!candidates[1].is_match);
}

#[test]
fn malformed_query_url_only_skips_its_own_pairings() {
    let query_urls = vec![
        "definitely not a url".to_string(),
        "https://example.com/story?id=4".to_string(),
    ];
    let mut candidates = vec![candidate("", &["https://example.com/story?id=4"])];

    match_candidates("", &query_urls, &mut candidates, &MatchConfig::default())
        .expect("url branch tolerates malformed urls");

    assert!(candidates[0].is_match);
}

#[test]
fn invalid_thresholds_are_rejected_before_matching() {
    let mut candidates = vec![candidate("text", &[])];

    for bad in [
        MatchConfig {
            min_common_bytes: 0,
            ..MatchConfig::default()
        },
        MatchConfig {
            min_overlap_percent: 101,
            ..MatchConfig::default()
        },
    ] {
        let result = match_candidates("query", &[], &mut candidates, &bad);
        assert!(matches!(result, Err(MatchError::InvalidConfig(_))));
    }
}
