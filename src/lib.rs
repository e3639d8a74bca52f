//! internkit: string interning primitives for dense integer identifiers.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod builder;
pub mod ds;
pub mod error;
pub mod interner;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
