//! Helpers for tests that mutate process environment.
//!
//! ```rust
//! use byok_async::test_support::EnvGuard;
//! use serial_test::serial;
//!
//! #[test]
//! #[serial(env)]
//! fn reads_key_from_env() {
//!     let _clean = EnvGuard::isolate_byok();
//!     let _key = EnvGuard::set("BYOK_API_KEY", "byok_sk_test");
//!     // ...
//! }
//! ```

use crate::config::{ENV_API_KEY, ENV_BASE_URL, ENV_USER_ID};

/// Restores an environment variable to its previous state on drop.
///
/// Only use from tests marked `#[serial(env)]`; the environment is process-global.
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Set `key` to `val` until the guard drops.
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env access with #[serial(env)].
        unsafe { std::env::set_var(key, val) };
        Self { key, prev }
    }

    /// Unset `key` until the guard drops.
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env access with #[serial(env)].
        unsafe { std::env::remove_var(key) };
        Self { key, prev }
    }

    /// Unset every `BYOK_*` variable the client reads.
    #[must_use]
    pub fn isolate_byok() -> [Self; 3] {
        [
            Self::remove(ENV_API_KEY),
            Self::remove(ENV_BASE_URL),
            Self::remove(ENV_USER_ID),
        ]
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.prev {
            // SAFETY: same serialization contract as construction.
            Some(v) => unsafe { std::env::set_var(self.key, v) },
            // SAFETY: same serialization contract as construction.
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}
