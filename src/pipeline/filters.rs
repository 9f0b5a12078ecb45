//! Line filter stages
//!
//! Each stage is a pure function over the ordered line sequence: lines go in,
//! fewer or normalized lines come out, relative order is never changed.

use std::collections::HashSet;

/// Keep lines whose every character is in the allowed set.
///
/// Strips markup remnants, footnote markers, foreign scripts, and stray
/// symbols left behind by the splitter. A single offending character drops
/// the whole line.
pub fn retain_whitelisted(lines: Vec<String>, allowed: &HashSet<char>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| line.chars().all(|c| allowed.contains(&c)))
        .collect()
}

/// Drop empty lines
pub fn drop_blank(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|line| !line.is_empty()).collect()
}

/// Keep lines with at least `min_words` whitespace-separated tokens
pub fn retain_min_words(lines: Vec<String>, min_words: usize) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| line.split_whitespace().count() >= min_words)
        .collect()
}

/// Cut the last `count` lines of the document.
///
/// Discards the boilerplate (license footers, transcriber notes) source texts
/// carry at the end. A document with fewer lines than `count` becomes empty.
pub fn trim_trailing(mut lines: Vec<String>, count: usize) -> Vec<String> {
    let keep = lines.len().saturating_sub(count);
    lines.truncate(keep);
    lines
}

/// Uppercase the first character of every line.
///
/// A line that is somehow empty at this point is dropped; the blank filter
/// runs earlier in the chain, so this only matters if the stages are
/// rearranged.
pub fn capitalize_first(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter_map(|line| {
            let mut chars = line.chars();
            let first = chars.next()?;
            let mut out = String::with_capacity(line.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            Some(out)
        })
        .collect()
}

/// Drop lines whose last token is two characters or shorter.
///
/// Such endings are usually abbreviations rather than true sentence ends.
pub fn retain_long_final_token(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| {
            line.split_whitespace()
                .last()
                .map_or(false, |token| token.chars().count() > 2)
        })
        .collect()
}

/// Drop lines whose last token contains a `.` anywhere but its final position.
///
/// Catches abbreviations like "np." that survive the splitter because their
/// period was not followed by a space.
pub fn retain_clean_final_token(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| {
            line.split_whitespace().last().map_or(false, |token| {
                match token.char_indices().last() {
                    Some((last, _)) => !token[..last].contains('.'),
                    None => false,
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn polish_whitelist() -> HashSet<char> {
        crate::config::FilterConfig::default()
            .allowed_characters
            .chars()
            .collect()
    }

    #[test]
    fn whitelist_drops_whole_lines() {
        let allowed = polish_whitelist();
        let result = retain_whitelisted(
            lines(&[
                "Dobre zdanie po polsku.",
                "Przypis [12] z nawiasami",
                "Zdanie z myślnikiem — tutaj",
                "Liczby 123 i znaki ?!",
            ]),
            &allowed,
        );
        assert_eq!(result, lines(&["Dobre zdanie po polsku.", "Liczby 123 i znaki ?!"]));
    }

    #[test]
    fn whitelist_keeps_accented_polish_letters() {
        let allowed = polish_whitelist();
        let result = retain_whitelisted(lines(&["Żółć gęślą jaźń."]), &allowed);
        assert_eq!(result, lines(&["Żółć gęślą jaźń."]));
    }

    #[test]
    fn blank_filter_drops_only_empty_lines() {
        let result = drop_blank(lines(&["a", "", "b", "", ""]));
        assert_eq!(result, lines(&["a", "b"]));
    }

    #[test]
    fn word_count_uses_whitespace_tokens() {
        let result = retain_min_words(lines(&["jedno", "dwa słowa", "trzy całe słowa"]), 2);
        assert_eq!(result, lines(&["dwa słowa", "trzy całe słowa"]));
    }

    #[test]
    fn word_count_boundary_is_inclusive() {
        let result = retain_min_words(lines(&["dokładnie dwa"]), 2);
        assert_eq!(result, lines(&["dokładnie dwa"]));
    }

    #[test]
    fn trim_removes_from_the_end_only() {
        let result = trim_trailing(lines(&["a", "b", "c", "d"]), 2);
        assert_eq!(result, lines(&["a", "b"]));
    }

    #[test]
    fn trim_zero_is_a_no_op() {
        let result = trim_trailing(lines(&["a", "b"]), 0);
        assert_eq!(result, lines(&["a", "b"]));
    }

    #[test]
    fn trim_larger_than_document_empties_it() {
        let result = trim_trailing(lines(&["a", "b"]), 5);
        assert!(result.is_empty());
    }

    #[test]
    fn capitalize_uppercases_first_character_only() {
        let result = capitalize_first(lines(&["zdanie pierwsze", "łódka na wodzie", "Już duże"]));
        assert_eq!(
            result,
            lines(&["Zdanie pierwsze", "Łódka na wodzie", "Już duże"])
        );
    }

    #[test]
    fn capitalize_silently_drops_stray_empty_lines() {
        let result = capitalize_first(lines(&["", "dobre"]));
        assert_eq!(result, lines(&["Dobre"]));
    }

    #[test]
    fn short_final_token_is_dropped() {
        let result = retain_long_final_token(lines(&[
            "kończy się na np",
            "kończy się na w.",
            "kończy się dobrze tutaj",
        ]));
        assert_eq!(result, lines(&["kończy się dobrze tutaj"]));
    }

    #[test]
    fn final_token_length_counts_characters_not_bytes() {
        // "się" is three characters even though it is four bytes.
        let result = retain_long_final_token(lines(&["kończy się"]));
        assert_eq!(result, lines(&["kończy się"]));
    }

    #[test]
    fn embedded_period_in_final_token_drops_the_line() {
        let result = retain_clean_final_token(lines(&[
            "skrót w środku np.niby",
            "inicjał na końcu A.B.",
            "normalne zakończenie zdania.",
            "bez kropki wcale",
        ]));
        assert_eq!(
            result,
            lines(&["normalne zakończenie zdania.", "bez kropki wcale"])
        );
    }

    #[test]
    fn final_period_alone_is_allowed() {
        let result = retain_clean_final_token(lines(&["zdanie kończy się kropką."]));
        assert_eq!(result, lines(&["zdanie kończy się kropką."]));
    }
}
