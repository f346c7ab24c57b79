//! Case-insensitive text matching.
//!
//! Queries and haystacks are compared after Unicode lower-casing, so
//! full-width and kana text passes through unchanged while Latin text
//! matches regardless of case.

/// Trim surrounding whitespace (including ideographic spaces) and lower-case.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// True when `needle`, already normalized, occurs in `haystack`.
///
/// An empty needle occurs everywhere.
#[inline]
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Pasta "), "pasta");
        assert_eq!(normalize("\u{3000}トマト\u{3000}"), "トマト");
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        assert!(contains_normalized("Olive Oil", "olive"));
        assert!(contains_normalized("トマト缶", "トマト"));
        assert!(!contains_normalized("トマト", "トマト缶"));
    }

    #[test]
    fn test_empty_needle_matches() {
        assert!(contains_normalized("", ""));
        assert!(contains_normalized("醤油", ""));
    }
}
