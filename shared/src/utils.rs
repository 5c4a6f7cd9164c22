//! # Shared Utility Functions
//!
//! Address formatting used by the connect button and anything else that shows
//! an account.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x71C7...976F");
//! ```

/// Default number of leading characters kept by [`truncate_address`].
///
/// Six keeps the `0x` prefix plus four hex digits.
pub const DEFAULT_PREFIX_LEN: usize = 6;

/// Default number of trailing characters kept by [`truncate_address`].
pub const DEFAULT_SUFFIX_LEN: usize = 4;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
/// Non-ASCII input is returned unchanged rather than sliced mid-character.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
/// assert_eq!(format_address(addr, 6, 4), "0x71C7...976F");
/// assert_eq!(format_address(addr, 4, 6), "0x71...d8976F");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if !address.is_ascii()
        || address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // ASCII-only, so byte offsets are char boundaries
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the default prefix and suffix lengths.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
/// assert_eq!(truncate_address(addr), "0x71C7...976F");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, DEFAULT_PREFIX_LEN, DEFAULT_SUFFIX_LEN)
}
