//! Error types for the internkit library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when internal table invariants are
//!   violated (debug-only `check_invariants` method).
//! - [`ConfigError`]: Returned when interner configuration parameters are
//!   invalid (an out-of-range load factor).
//!
//! ## Example Usage
//!
//! ```
//! use internkit::error::ConfigError;
//! use internkit::interner::StringInterner;
//!
//! // Fallible constructor for user-configurable parameters
//! let table: Result<StringInterner, ConfigError> =
//!     StringInterner::try_with_capacity_and_load_factor(64, 0.7);
//! assert!(table.is_ok());
//!
//! // Invalid load factor is caught without panicking
//! let bad = StringInterner::try_with_capacity_and_load_factor(64, 1.5);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal interner invariants are violated.
///
/// Produced by the debug-only `check_invariants` method on
/// `StringInterner`. Carries a human-readable description of which
/// invariant failed.
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

/// Error returned when interner configuration parameters are invalid.
///
/// Produced by `StringInterner::try_with_capacity_and_load_factor` and
/// `InternerBuilder::try_build`. Carries a human-readable description of
/// which parameter failed validation.
///
/// # Example
///
/// ```
/// use internkit::interner::StringInterner;
///
/// let err = StringInterner::try_with_capacity_and_load_factor(64, 0.0).unwrap_err();
/// assert!(err.to_string().contains("load factor"));
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
