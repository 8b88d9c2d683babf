//! Whitespace stripping for overlap comparison.
//!
//! Queries arrive copy-pasted out of chat apps and articles are stored with
//! their own line wrapping, so raw byte comparison would break common runs at
//! every reflow point. Stripping whitespace entirely (rather than collapsing
//! it) makes `"hello\nworld"` and `"hello world"` identical for LCSS
//! purposes.

/// Remove ASCII whitespace from `text`: space, tab, carriage return, and
/// newline bytes are dropped; every other byte passes through in order.
///
/// This is deliberately narrower than Unicode whitespace. Variable-width
/// whitespace such as U+00A0 or ideographic spaces passes through untouched,
/// a known limitation of the heuristic this engine preserves.
///
/// # Examples
///
/// ```rust
/// use similarity::strip_whitespace;
///
/// assert_eq!(strip_whitespace("a b\tc\r\nd"), "abcd");
/// assert_eq!(strip_whitespace("  already  stripped  "), "alreadystripped");
/// assert_eq!(strip_whitespace(""), "");
/// ```
pub fn strip_whitespace(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    for ch in text.chars() {
        if !matches!(ch, ' ' | '\t' | '\r' | '\n') {
            stripped.push(ch);
        }
    }
    stripped
}
