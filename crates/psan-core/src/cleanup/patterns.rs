//! The three rewrite steps, each a single regex substitution.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// U+00A0 and its entity spellings (named, decimal, hex).
const NBSP: &str = r"\x{00A0}|&nbsp;|&#0*160;|&#x0*a0;";

/// `<br>`, `<br/>`, `<br />`.
const BREAK: &str = r"<br\s*/?>";

fn nbsp_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("(?i)(?:{NBSP})+")).expect("valid regex"))
}

fn double_break_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"(?i){BREAK}\s*{BREAK}")).expect("valid regex"))
}

fn empty_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?i)<(?:p|div)\b[^>]*>(?:\s|{NBSP}|{BREAK})*</(?:p|div)\s*>"
        ))
        .expect("valid regex")
    })
}

/// Step 1: every run of non-breaking spaces becomes one ordinary space.
pub fn collapse_nbsp_runs(input: &str) -> Cow<'_, str> {
    nbsp_run_regex().replace_all(input, " ")
}

/// Step 2: two line breaks in a row become a paragraph boundary.
pub fn split_double_breaks(input: &str) -> Cow<'_, str> {
    double_break_regex().replace_all(input, "</p><p>")
}

/// Step 3: drop `p`/`div` blocks holding only whitespace, nbsp or breaks.
pub fn remove_empty_blocks(input: &str) -> Cow<'_, str> {
    empty_block_regex().replace_all(input, "")
}
