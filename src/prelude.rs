pub use crate::builder::InternerBuilder;
pub use crate::ds::{ChunkArena, CHUNK_CAP};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::interner::{
    StringInterner, SymbolId, DEFAULT_LOAD_FACTOR, MAX_SYMBOLS, MIN_CAPACITY,
};

#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::InternerMetricsSnapshot;
