/// Signer name cleanup: whitespace filter, case fixing, and spacing.
///
/// Whitespace here is the ASCII set a regex `\s` matches: space, tab, line
/// feed, vertical tab, form feed, and carriage return. Case mapping is ASCII
/// only as well: accented letters and other non-ASCII characters are never
/// upper- or lowercased, and non-breaking spaces are ordinary characters.

/// Whether `c` separates name tokens.
#[must_use]
pub fn is_name_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Clean a raw signer name.
///
/// Returns `None` for names without a token boundary, which filters out
/// first-name-only signatures. A name written entirely in capitals is
/// lowercased before each token's first letter is capitalised; any other name
/// only has its token initials capitalised, so "McDonald" survives but
/// "mcdonald" becomes "Mcdonald". Whitespace runs become one space and the
/// ends are trimmed.
#[must_use]
pub fn clean_name(raw: &str) -> Option<String> {
    if !raw.chars().any(is_name_whitespace) {
        return None;
    }

    let cased = if raw.to_ascii_uppercase() == raw {
        capitalize_words(&raw.to_ascii_lowercase())
    } else {
        capitalize_words(raw)
    };

    let cleaned = collapse_whitespace(&cased);
    // "John  " has whitespace but only one token once trimmed.
    if cleaned.contains(' ') {
        Some(cleaned)
    } else {
        None
    }
}

/// Uppercase the first character of every token when it is an ASCII letter,
/// leaving the rest untouched.
#[must_use]
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = is_name_whitespace(c);
    }
    out
}

/// Collapse whitespace runs to a single space and trim both ends.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for token in s.split(is_name_whitespace).filter(|t| !t.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_caps_is_lowercased_first() {
        assert_eq!(clean_name("JOHN Q. PUBLIC").as_deref(), Some("John Q. Public"));
    }

    #[test]
    fn test_lowercase_tokens_are_capitalised() {
        assert_eq!(clean_name("john mcdonald").as_deref(), Some("John Mcdonald"));
    }

    #[test]
    fn test_internal_capitals_kept_in_mixed_case() {
        assert_eq!(clean_name("John McDonald").as_deref(), Some("John McDonald"));
        assert_eq!(clean_name("jANE dOE").as_deref(), Some("JANE DOE"));
    }

    #[test]
    fn test_single_token_rejected() {
        assert_eq!(clean_name("Cher"), None);
        assert_eq!(clean_name("Jean-Luc"), None);
        assert_eq!(clean_name(""), None);
    }

    #[test]
    fn test_single_token_with_padding_rejected() {
        assert_eq!(clean_name("  Madonna "), None);
        assert_eq!(clean_name("\t"), None);
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(
            clean_name("  jane \t\n  doe  ").as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(
            clean_name("Mary\u{0B}Ann\u{0C}Smith\r").as_deref(),
            Some("Mary Ann Smith")
        );
    }

    #[test]
    fn test_non_breaking_space_is_not_a_boundary() {
        assert_eq!(clean_name("Jane\u{A0}Doe"), None);
    }

    #[test]
    fn test_no_letters_takes_all_caps_branch() {
        assert_eq!(clean_name("-- --").as_deref(), Some("-- --"));
        assert_eq!(clean_name("J. R.").as_deref(), Some("J. R."));
    }

    #[test]
    fn test_case_mapping_is_ascii_only() {
        assert_eq!(clean_name("JOSÉ GARCÍA").as_deref(), Some("JosÉ GarcÍa"));
        assert_eq!(clean_name("élodie durand").as_deref(), Some("élodie Durand"));
        assert_eq!(clean_name("ÅSA LINDQVIST").as_deref(), Some("Åsa Lindqvist"));
    }

    #[test]
    fn test_capitalize_words_only_touches_initials() {
        assert_eq!(capitalize_words("o'neil van der berg"), "O'neil Van Der Berg");
        assert_eq!(capitalize_words("a\tb"), "A\tB");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a   b  "), "a b");
        assert_eq!(collapse_whitespace(""), "");
    }
}
