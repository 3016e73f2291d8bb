//! # Shared Utility Functions
//!
//! Display helpers used by both the core library and the web front end.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - keep the first N and last M characters of an address
//! - [`truncate_address`] - the 4/4 form shown on the wallet button
//!
//! ## Number Formatting
//!
//! - [`group_thousands`] - `1,235`
//! - [`compact_count`] - `2.5M+`
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! assert_eq!(truncate_address("abcd1234wxyz"), "abcd...wxyz");
//! ```

/// Format a wallet address by keeping the first `prefix_len` and last `suffix_len` characters.
///
/// Works on characters, not bytes, so a malformed non-ASCII address cannot cause a panic.
/// Addresses that are not longer than `prefix_len + suffix_len` are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
/// assert_eq!(format_address(addr, 6, 5), "8W6Qgi...uJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

/// Format a wallet address with a 4-character prefix and suffix.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(truncate_address(addr), "8W6Q...JKAL");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Format an integer with thousands separators (`1235` -> `"1,235"`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compact "at least" count used on the landing page (`2_500_000` -> `"2.5M+"`).
pub fn compact_count(value: u64) -> String {
    fn scaled(value: u64, unit: u64, suffix: &str) -> String {
        let tenths = value / (unit / 10);
        if tenths % 10 == 0 {
            format!("{}{suffix}+", tenths / 10)
        } else {
            format!("{}.{}{suffix}+", tenths / 10, tenths % 10)
        }
    }

    match value {
        v if v >= 1_000_000 => scaled(v, 1_000_000, "M"),
        v if v >= 1_000 => scaled(v, 1_000, "K"),
        v => format!("{v}+"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
        assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
        assert_eq!(format_address(addr, 2, 2), "8W...AL");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("12345678", 4, 4), "12345678");
        assert_eq!(format_address("", 4, 4), "");
    }

    #[test]
    fn test_format_address_multibyte() {
        assert_eq!(format_address("ñññññññññ", 2, 2), "ññ...ññ");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address("abcd1234wxyz"), "abcd...wxyz");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1235), "1,235");
        assert_eq!(group_thousands(2_500_000), "2,500,000");
    }

    #[test]
    fn test_compact_count() {
        assert_eq!(compact_count(2_500_000), "2.5M+");
        assert_eq!(compact_count(3_000_000), "3M+");
        assert_eq!(compact_count(50_000), "50K+");
        assert_eq!(compact_count(200), "200+");
    }
}
