//! Sanitization - reduces raw text to the digit/separator alphabet
//!
//! Currency symbols, units, signs and any other decoration are discarded
//! silently. Sanitization never fails; garbage simply sanitizes to a string
//! that no format rule recognizes.

use std::fmt;
use std::ops::Deref;

/// Text containing only ASCII digits, `.`, `,` and ASCII whitespace
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SanitizedString(String);

impl SanitizedString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for SanitizedString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SanitizedString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim surrounding whitespace, then drop every character outside
/// `[0-9.,\s]`.
///
/// Trimming happens first, so whitespace left exposed by removed decoration
/// (`"12 €"` → `"12 "`) survives and the value will not be recognized.
pub fn sanitize(input: &str) -> SanitizedString {
    SanitizedString(
        input
            .trim_matches(is_trimmable)
            .chars()
            .filter(|&c| is_kept(c))
            .collect(),
    )
}

fn is_trimmable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

fn is_kept(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ',' || is_separator_space(c)
}

// ASCII whitespace plus vertical tab
fn is_separator_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(sanitize("  127.00\n").as_str(), "127.00");
        assert_eq!(sanitize("\t\x0B42\0").as_str(), "42");
    }

    #[test]
    fn test_strips_decoration() {
        assert_eq!(sanitize("$1,000,000.12").as_str(), "1,000,000.12");
        assert_eq!(sanitize("SEK 1.000.000,12").as_str(), " 1.000.000,12");
        assert_eq!(sanitize("-45").as_str(), "45");
    }

    #[test]
    fn test_keeps_internal_whitespace() {
        assert_eq!(sanitize("1 000 000,50").as_str(), "1 000 000,50");
    }

    #[test]
    fn test_trailing_decoration_exposes_space() {
        assert_eq!(sanitize("12 €").as_str(), "12 ");
    }

    #[test]
    fn test_non_ascii_digits_removed() {
        // Arabic-Indic digits and non-breaking space are not in the alphabet
        assert_eq!(sanitize("١٢٣").as_str(), "");
        assert_eq!(sanitize("1\u{a0}000").as_str(), "1000");
    }

    #[test]
    fn test_empty_and_garbage() {
        assert!(sanitize("").is_empty());
        assert!(sanitize("   ").is_empty());
        assert!(sanitize("abc").is_empty());
    }
}
