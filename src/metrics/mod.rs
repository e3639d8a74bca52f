//! Optional operation counters for the interner.
//!
//! Enabled with the `metrics` cargo feature. Counters are observational
//! only: they never influence interning behavior, and resetting them leaves
//! the table untouched.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;

pub use cell::MetricsCell;
pub use metrics_impl::InternerMetrics;
pub use snapshot::InternerMetricsSnapshot;
