//! Advisory retry helpers.
//!
//! The client performs no retries of its own. These helpers let callers build
//! their own policy from a classified error.

use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Determines if an HTTP status code is worth retrying
///
/// Retryable: 408, 409, 429, and 5xx
#[must_use]
pub const fn is_retryable_status(code: u16) -> bool {
    matches!(code, 408 | 409 | 429 | 500..=599)
}

/// Parses a numeric `Retry-After` header into whole seconds
///
/// Returns `None` if the header is missing, not numeric, or an HTTP date.
#[must_use]
pub fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
}
