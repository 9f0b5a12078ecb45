//! Sentence boundary heuristic

/// Break raw text into candidate sentence lines.
///
/// A `.`, `!`, or `?` immediately followed by a space ends a sentence; the
/// punctuation stays with the preceding text and the space is consumed. Line
/// breaks already present in the input are boundaries as well, since every
/// later stage works on the newline-separated sequence. Deliberately
/// approximate: abbreviations, decimal numbers, and ellipses mis-split here
/// and are cleaned up by the filter chain instead.
pub fn split_sentences(raw: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\n' => {
                lines.push(std::mem::take(&mut current));
            }
            '.' | '!' | '?' if chars.peek() == Some(&' ') => {
                current.push(ch);
                chars.next();
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    lines.push(current);
    lines
}
