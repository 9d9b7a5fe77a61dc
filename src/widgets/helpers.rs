//! Helper functions for formatting wallet data in widgets.

// ============================================================================
// Address Formatting
// ============================================================================

/// Truncate an address or hash to fit in the given width.
///
/// If the value is longer than `max_len`, it is shortened with an ellipsis
/// in the middle (e.g., "bc1qx...h2k9").
///
/// # Examples
///
/// ```ignore
/// let truncated = truncate_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 12);
/// assert_eq!(truncated, "1A1zP...vfNa");
/// ```
#[must_use]
pub fn truncate_address(addr: &str, max_len: usize) -> String {
    let len = addr.chars().count();
    if len <= max_len {
        return addr.to_string();
    }

    if max_len < 7 {
        return addr.chars().take(max_len).collect();
    }

    // Reserve 3 chars for "..."
    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = addr.chars().take(prefix_len).collect();
    let suffix: String = addr.chars().skip(len - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::fits("T1", 12, "T1")]
    #[case::exact("abcdefghijkl", 12, "abcdefghijkl")]
    #[case::legacy("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 12, "1A1zP...vfNa")]
    #[case::tiny("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq", 5, "bc1qa")]
    fn test_truncate_address(#[case] addr: &str, #[case] max_len: usize, #[case] expected: &str) {
        let truncated = truncate_address(addr, max_len);
        assert_eq!(truncated, expected);
        assert!(truncated.chars().count() <= max_len);
    }
}
