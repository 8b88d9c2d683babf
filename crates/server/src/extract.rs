//! URL detection in query text.
//!
//! Queries are free text pasted out of chat apps; any link they contain
//! switches the match policy from substring overlap to URL equivalence.
//! Detection is strict URL syntax only (scheme required), so bare domains
//! in prose do not trigger the URL branch.

use linkify::{LinkFinder, LinkKind};

/// Return every URL-shaped substring of `text`, in order of appearance.
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder
        .links(text)
        .map(|link| link.as_str().to_string())
        .collect()
}
