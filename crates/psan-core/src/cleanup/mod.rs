//! Text cleanup for pasted HTML.
//!
//! Runs before any structural parsing. The steps are order dependent:
//! nbsp runs collapse first so that `&nbsp;`-only paragraphs count as empty,
//! and double breaks are split before empty blocks are dropped.
//!
//! Removing an empty block can expose another one (`<div><p> </p></div>`) or
//! make two breaks adjacent, so the pass repeats until the text stops
//! changing. Every rewrite shortens the text, so the loop terminates.

mod patterns;

pub use patterns::{collapse_nbsp_runs, remove_empty_blocks, split_double_breaks};

/// One application of the three steps, in order.
pub fn cleanup_pass(input: &str) -> String {
    let text = collapse_nbsp_runs(input);
    let text = split_double_breaks(&text);
    remove_empty_blocks(&text).into_owned()
}

/// Normalize whitespace and empty-block noise. Never fails; input without
/// matches comes back unchanged.
pub fn text_cleanup(input: &str) -> String {
    let mut current = cleanup_pass(input);
    let mut passes = 1;
    loop {
        let next = cleanup_pass(&current);
        if next == current {
            if passes > 1 {
                tracing::trace!(passes, "text cleanup reached fixpoint");
            }
            return current;
        }
        current = next;
        passes += 1;
    }
}
