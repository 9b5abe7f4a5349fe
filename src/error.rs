//! Error types for the lrukit library.
//!
//! Cache operations themselves are total: a miss is `None`, and `set` always
//! succeeds. Errors only surface from configuration and debug validation.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned by `check_invariants` when the key index and
//!   the recency list disagree.
//! - [`ConfigError`]: Returned by [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build)
//!   when the requested configuration cannot be honored.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::builder::{Backend, CacheBuilder};
//! use lrukit::error::ConfigError;
//!
//! let cache = CacheBuilder::new(100).backend(Backend::Slot).try_build::<u64, u64>();
//! assert!(cache.is_ok());
//!
//! let too_big: Result<_, ConfigError> = CacheBuilder::new(usize::MAX)
//!     .backend(Backend::Slot)
//!     .try_build::<u64, u64>();
//! assert!(too_big.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// # Example
///
/// ```
/// use lrukit::builder::{Backend, CacheBuilder};
///
/// let err = CacheBuilder::new(usize::MAX)
///     .backend(Backend::Slot)
///     .try_build::<u64, u64>()
///     .unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("index len 3 != list len 2");
        assert_eq!(err.to_string(), "index len 3 != list len 2");
        assert_eq!(err.message(), "index len 3 != list len 2");
    }

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity exceeds preallocation limit");
        assert_eq!(err.to_string(), "capacity exceeds preallocation limit");
        assert!(format!("{:?}", err).contains("preallocation"));
    }

    #[test]
    fn errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Clone + PartialEq>() {}
        assert_error::<InvariantError>();
        assert_error::<ConfigError>();
    }
}
