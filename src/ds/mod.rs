pub mod chunk_arena;

pub use chunk_arena::{ChunkArena, CHUNK_CAP};
