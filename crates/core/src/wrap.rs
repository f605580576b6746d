//! Greedy fixed-width paragraph fill.

/// Column width used for idea summaries.
pub const SUMMARY_WIDTH: usize = 110;

/// Fill `text` into lines of at most `width` characters.
///
/// Runs of whitespace collapse to a single break point; words are never
/// split or reordered. A word longer than `width` gets a line to itself.
pub fn fill(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len == 0 {
            out.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= width {
            out.push(' ');
            out.push_str(word);
            line_len += 1 + word_len;
        } else {
            out.push('\n');
            out.push_str(word);
            line_len = word_len;
        }
    }

    out
}
