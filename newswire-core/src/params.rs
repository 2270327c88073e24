//! Paging-parameter defaults and lenient fallback parsing

/// Default page number when the client omits or mangles `page`
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size when the client omits or mangles `pageSize`
pub const DEFAULT_PAGE_SIZE: u32 = 80;

/// Default search query for the everything feed
pub const DEFAULT_QUERY: &str = "world";

/// Default category for the headlines feed
pub const DEFAULT_CATEGORY: &str = "business";

/// Parse a positive integer query parameter, falling back to `default`
///
/// Malformed client input is not an error condition: non-numeric, negative,
/// or zero values all silently substitute the default. Zero counts as
/// absent, not as a page size.
pub fn positive_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|s| s.parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}
