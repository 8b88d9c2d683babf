use claimcheck::{
    longest_common_substring, longest_common_substring_chunked, match_candidates, strip_whitespace,
    ChunkConfig, MatchCandidate, MatchConfig,
};

#[test]
fn repeated_runs_produce_identical_verdicts() {
    let query = "they are giving away free concert tickets at the station";
    let texts = [
        "confirmed: free concert tickets at the station until noon",
        "no tickets of any kind are being distributed",
        "the station denies giving away free concert tickets",
    ];

    let mut first: Vec<MatchCandidate> = texts
        .iter()
        .map(|t| MatchCandidate::new(*t, vec![]))
        .collect();
    let mut second = first.clone();

    match_candidates(query, &[], &mut first, &MatchConfig::default()).unwrap();
    match_candidates(query, &[], &mut second, &MatchConfig::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn candidate_order_does_not_change_individual_verdicts() {
    let query = "free concert tickets at the station";
    let a = MatchCandidate::new("rumor about free concert tickets at the station", vec![]);
    let b = MatchCandidate::new("completely different subject", vec![]);

    let mut forward = vec![a.clone(), b.clone()];
    let mut backward = vec![b, a];

    match_candidates(query, &[], &mut forward, &MatchConfig::default()).unwrap();
    match_candidates(query, &[], &mut backward, &MatchConfig::default()).unwrap();

    assert_eq!(forward[0], backward[1]);
    assert_eq!(forward[1], backward[0]);
}

#[test]
fn chunked_scan_finds_the_same_length_as_the_full_scan() {
    // Length ratio far beyond the chunking threshold.
    let query = strip_whitespace("a very specific sentence that appears once");
    let article = strip_whitespace(&format!(
        "{}{}{}",
        "background noise text. ".repeat(120),
        "a very specific sentence that appears once",
        " and more background noise. ".repeat(120),
    ));

    let cfg = ChunkConfig::default();
    let chunked = longest_common_substring_chunked(query.as_bytes(), article.as_bytes(), &cfg);
    let full = longest_common_substring(query.as_bytes(), article.as_bytes());

    assert_eq!(chunked.len(), full.len());
    assert_eq!(chunked, full);
    assert_eq!(chunked.len(), query.len());
}

#[test]
fn chunked_scan_is_symmetric_in_result_length() {
    let short = strip_whitespace("the shared fragment of interest");
    let long = strip_whitespace(&format!(
        "{}the shared fragment of interest{}",
        "left padding text. ".repeat(80),
        " right padding text.".repeat(80),
    ));

    let cfg = ChunkConfig::default();
    let ab = longest_common_substring_chunked(short.as_bytes(), long.as_bytes(), &cfg);
    let ba = longest_common_substring_chunked(long.as_bytes(), short.as_bytes(), &cfg);

    assert_eq!(ab.len(), ba.len());
}
