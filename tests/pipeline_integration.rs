use claimcheck::{match_candidates, MatchCandidate, MatchConfig, Matcher};

fn candidate(text: &str, urls: &[&str]) -> MatchCandidate {
    MatchCandidate::new(text, urls.iter().map(|u| u.to_string()).collect())
}

#[test]
fn text_query_flags_quoting_articles_only() {
    let query = "hello world";
    let mut candidates = vec![
        candidate("hello world!!", &[]),
        candidate("a long article that quotes hello world in the middle", &[]),
        candidate("weather report for the weekend", &[]),
    ];

    match_candidates(query, &[], &mut candidates, &MatchConfig::default())
        .expect("non-empty query");

    assert!(candidates[0].is_match, "100% overlap beats the 80% ratio");
    assert!(candidates[1].is_match);
    assert!(!candidates[2].is_match);
}

#[test]
fn url_query_short_circuits_text_overlap() {
    let query = "someone sent me this http://example.com/x?y=1 is it true?";
    let query_urls = vec!["http://example.com/x?y=1".to_string()];

    let mut candidates = vec![
        // Shares the link (with extra tracking params), not the text.
        candidate("entirely different words", &["http://example.com/x?y=1&z=2"]),
        // Shares the text verbatim, not the link.
        candidate(query, &["https://elsewhere.example/page"]),
        // Shares nothing.
        candidate("entirely different words", &[]),
    ];

    match_candidates(query, &query_urls, &mut candidates, &MatchConfig::default())
        .expect("query carries a url");

    assert!(candidates[0].is_match, "equivalent link is a match");
    assert!(
        !candidates[1].is_match,
        "text overlap is not consulted when the query has links"
    );
    assert!(!candidates[2].is_match);
}

#[test]
fn long_articles_take_the_chunked_path_and_still_match() {
    let query = "a distinctive claim about tap water turning green overnight";
    let filler = "perfectly ordinary municipal reporting with no relation. ".repeat(100);
    let article = format!("{filler}{query}{filler}");

    let mut candidates = vec![candidate(&article, &[])];
    match_candidates(query, &[], &mut candidates, &MatchConfig::default())
        .expect("non-empty query");

    assert!(candidates[0].is_match);
}

#[test]
fn engine_and_convenience_wrapper_agree() {
    let engine = Matcher::new(MatchConfig::default()).unwrap();
    let query = "the ministry never announced this policy";

    let mut via_wrapper = vec![
        candidate("sources confirm the ministry never announced this policy at all", &[]),
        candidate("unrelated sports coverage", &[]),
    ];
    let mut via_engine = via_wrapper.clone();

    match_candidates(query, &[], &mut via_wrapper, &MatchConfig::default()).unwrap();
    engine.annotate(query, &[], &mut via_engine).unwrap();

    assert_eq!(via_wrapper, via_engine);
}
