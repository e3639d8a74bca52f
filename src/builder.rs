//! Fluent builder for configuring an interner.
//!
//! Thin configuration layer over the `StringInterner` constructors; useful
//! when capacity and load factor come from host-application config.
//!
//! ## Example
//!
//! ```rust
//! use internkit::builder::InternerBuilder;
//!
//! let mut interner = InternerBuilder::new()
//!     .capacity(1000)
//!     .load_factor(0.8)
//!     .build();
//!
//! let sym = interner.intern("hello");
//! assert_eq!(interner.resolve(sym), Some("hello"));
//! assert_eq!(interner.capacity(), 1024);
//! ```

use crate::error::ConfigError;
use crate::interner::{StringInterner, DEFAULT_LOAD_FACTOR, MIN_CAPACITY};

/// Builder for [`StringInterner`].
///
/// Defaults: capacity [`MIN_CAPACITY`], load factor [`DEFAULT_LOAD_FACTOR`].
#[derive(Debug, Clone)]
pub struct InternerBuilder {
    capacity: usize,
    load_factor: f64,
}

impl InternerBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self {
            capacity: MIN_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Sets the initial slot capacity. Raised to the minimum floor and
    /// rounded up to a power of two at build time.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the load factor controlling growth. Must lie in `(0.0, 1.0)`;
    /// validated at build time.
    pub fn load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Builds the interner.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid. See [`try_build`](Self::try_build).
    pub fn build(self) -> StringInterner {
        match self.try_build() {
            Ok(interner) => interner,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds the interner, returning an error on invalid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the load factor is not finite or lies
    /// outside `(0.0, 1.0)`.
    pub fn try_build(self) -> Result<StringInterner, ConfigError> {
        StringInterner::try_with_capacity_and_load_factor(self.capacity, self.load_factor)
    }
}

impl Default for InternerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_interner_defaults() {
        let interner = InternerBuilder::new().build();
        assert_eq!(interner.capacity(), MIN_CAPACITY);
        assert_eq!(interner.load_factor(), DEFAULT_LOAD_FACTOR);
    }

    #[test]
    fn capacity_is_rounded_at_build_time() {
        let interner = InternerBuilder::new().capacity(100).build();
        assert_eq!(interner.capacity(), 128);
    }

    #[test]
    fn try_build_rejects_invalid_load_factor() {
        let err = InternerBuilder::new().load_factor(0.0).try_build().unwrap_err();
        assert!(err.to_string().contains("load factor"));
    }

    #[test]
    #[should_panic(expected = "load factor")]
    fn build_panics_on_invalid_load_factor() {
        let _ = InternerBuilder::new().load_factor(2.0).build();
    }

    #[test]
    fn built_interner_is_usable() {
        let mut interner = InternerBuilder::new().capacity(32).load_factor(0.5).build();
        let a = interner.intern("a");
        assert_eq!(interner.resolve(a), Some("a"));
        assert_eq!(interner.load_factor(), 0.5);
    }
}
