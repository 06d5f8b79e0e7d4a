//! Key normalization shared by the dictionary builder and the resolver.
//!
//! Two normalization levels exist. The *normalized* key keeps only ASCII
//! letters and digits, lower-cased. The *loose* key is the raw identifier
//! trimmed and lower-cased with punctuation left in place.

/// Client name used whenever a vehicle cannot be matched, and for dictionary
/// rows whose client column is blank.
pub const UNKNOWN_CLIENT: &str = "UNKNOWN CLIENT";

/// Remove every character that is not an ASCII letter or digit.
///
/// Case is preserved.
pub fn strip_non_alnum(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Fully normalized lookup key: `*` masking removed, non-alphanumerics
/// stripped, lower-cased.
///
/// ```
/// use clicklife_domain::normalize_key;
/// assert_eq!(normalize_key(" AB-12*3 "), "ab123");
/// ```
pub fn normalize_key(value: &str) -> String {
    strip_non_alnum(&value.replace('*', "")).to_ascii_lowercase()
}

/// Loose lookup key: lower-cased and trimmed, punctuation kept.
pub fn loose_key(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Collapse internal whitespace runs to one space and trim the ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_non_alnum_keeps_case() {
        assert_eq!(strip_non_alnum("Ab-12 3"), "Ab123");
    }

    #[test]
    fn test_strip_non_alnum_drops_non_ascii() {
        assert_eq!(strip_non_alnum("دبي 12345"), "12345");
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("AB-123"), "ab123");
        assert_eq!(normalize_key("**657014"), "657014");
        assert_eq!(normalize_key("  "), "");
    }

    #[test]
    fn test_loose_key() {
        assert_eq!(loose_key("  AB-123 "), "ab-123");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }
}
