//! Wildcard pattern matching for LIKE and literal search criteria

/// LIKE pattern matching, anchored at both ends.
///
/// Wildcards:
/// - % matches any sequence of characters (including empty)
/// - _ matches exactly one character
///
/// Case-sensitive.
pub(crate) fn like_match(text: &str, pattern: &str) -> bool {
    match_bytes(text.as_bytes(), pattern.as_bytes(), true)
}

/// Literal search criterion matching, unanchored.
///
/// Both `*` and `%` are multi-character wildcards; there is no
/// single-character wildcard. A criterion without wildcards behaves as
/// substring containment. `ignore_case` lowercases both sides first.
pub(crate) fn wildcard_match(text: &str, criterion: &str, ignore_case: bool) -> bool {
    // Unanchored: equivalent to LIKE '%criterion%' with * folded into %
    let pattern: String = criterion
        .chars()
        .map(|ch| if ch == '*' { '%' } else { ch })
        .collect();
    let pattern = format!("%{}%", pattern);

    if ignore_case {
        match_bytes(
            text.to_lowercase().as_bytes(),
            pattern.to_lowercase().as_bytes(),
            false,
        )
    } else {
        match_bytes(text.as_bytes(), pattern.as_bytes(), false)
    }
}

/// Byte-wise matcher shared by both entry points.
///
/// `underscore_wildcard` controls whether `_` matches a single character
/// (LIKE) or only itself (search criteria).
fn match_bytes(text: &[u8], pattern: &[u8], underscore_wildcard: bool) -> bool {
    match_at(text, pattern, 0, 0, underscore_wildcard)
}

fn match_at(
    text: &[u8],
    pattern: &[u8],
    text_pos: usize,
    pattern_pos: usize,
    underscore_wildcard: bool,
) -> bool {
    // Pattern consumed: match succeeds only if the text is consumed too
    if pattern_pos >= pattern.len() {
        return text_pos >= text.len();
    }

    match pattern[pattern_pos] {
        b'%' => {
            // Collapse runs of % before trying each split point
            let mut next_pattern = pattern_pos;
            while next_pattern < pattern.len() && pattern[next_pattern] == b'%' {
                next_pattern += 1;
            }
            for skip in 0..=(text.len() - text_pos) {
                if match_at(text, pattern, text_pos + skip, next_pattern, underscore_wildcard) {
                    return true;
                }
            }
            false
        }
        b'_' if underscore_wildcard => {
            if text_pos >= text.len() {
                return false;
            }
            match_at(text, pattern, text_pos + 1, pattern_pos + 1, underscore_wildcard)
        }
        ch => {
            if text_pos >= text.len() || text[text_pos] != ch {
                return false;
            }
            match_at(text, pattern, text_pos + 1, pattern_pos + 1, underscore_wildcard)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_exact() {
        assert!(like_match("abc", "abc"));
        assert!(!like_match("abc", "abd"));
        assert!(!like_match("abc", "ab"));
    }

    #[test]
    fn test_like_percent() {
        assert!(like_match("John Smith", "John%"));
        assert!(like_match("John Smith", "%Smith"));
        assert!(like_match("John Smith", "%hn Sm%"));
        assert!(like_match("", "%"));
        assert!(!like_match("John", "%Smith"));
    }

    #[test]
    fn test_like_underscore() {
        assert!(like_match("cat", "c_t"));
        assert!(!like_match("cart", "c_t"));
        assert!(like_match("cat", "___"));
    }

    #[test]
    fn test_like_is_anchored() {
        assert!(!like_match("ABC", "B"));
        assert!(like_match("ABC", "%B%"));
    }

    #[test]
    fn test_wildcard_substring_behavior() {
        // No wildcards: substring containment
        assert!(wildcard_match("ABC", "B", false));
        assert!(wildcard_match("ABC", "ABC", false));
        assert!(!wildcard_match("ABC", "D", false));
    }

    #[test]
    fn test_wildcard_star_and_percent() {
        assert!(wildcard_match("ABC", "A*", false));
        assert!(wildcard_match("ABC", "A%C", false));
        assert!(wildcard_match("ABC", "*C", false));
        assert!(!wildcard_match("ABC", "A*D", false));
    }

    #[test]
    fn test_wildcard_underscore_is_literal() {
        assert!(wildcard_match("a_b", "a_b", false));
        assert!(!wildcard_match("axb", "a_b", false));
    }

    #[test]
    fn test_wildcard_case_flag() {
        assert!(!wildcard_match("ABC", "abc", false));
        assert!(wildcard_match("ABC", "abc", true));
        assert!(wildcard_match("ABC", "a*", true));
    }
}
