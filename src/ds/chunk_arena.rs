//! Append-only chunked arena with stable element addresses.
//!
//! Stores elements in fixed-capacity chunks and hands out dense `usize`
//! indices. A chunk's buffer is allocated once and never resized, so an
//! element's address never changes after it is written. Essential for the
//! string interner, where growth of the index must not move stored strings.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ChunkArena<T> Layout                              │
//! │                                                                         │
//! │   chunks: Vec<Vec<T>>          each inner Vec allocated with            │
//! │   len: total elements          capacity CHUNK_CAP, pushed into,         │
//! │                                never resized                            │
//! │                                                                         │
//! │   After 2050 push() calls (CHUNK_CAP = 1024):                           │
//! │                                                                         │
//! │   chunk 0            chunk 1            chunk 2                         │
//! │   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐                │
//! │   │ 0 … 1023     │   │ 1024 … 2047  │   │ 2048, 2049   │                │
//! │   │ (full)       │   │ (full)       │   │ (room left)  │                │
//! │   └──────────────┘   └──────────────┘   └──────────────┘                │
//! │                                                                         │
//! │   Index Mapping                                                         │
//! │   ─────────────                                                         │
//! │                                                                         │
//! │   get(i) = chunks[i / CHUNK_CAP][i % CHUNK_CAP]                         │
//! │                                                                         │
//! │   The outer Vec may reallocate its array of chunk headers, but the      │
//! │   chunk buffers those headers point at never move.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation       | Description                          | Complexity |
//! |-----------------|--------------------------------------|------------|
//! | [`push`]        | Append, returning the dense index    | O(1)       |
//! | [`get`]         | Look up an element by index          | O(1)       |
//! | [`iter`]        | Iterate in insertion order           | O(n)       |
//! | [`capacity`]    | Total slots across allocated chunks  | O(1)       |
//!
//! [`push`]: ChunkArena::push
//! [`get`]: ChunkArena::get
//! [`iter`]: ChunkArena::iter
//! [`capacity`]: ChunkArena::capacity
//!
//! ## Example Usage
//!
//! ```
//! use internkit::ds::ChunkArena;
//!
//! let mut arena: ChunkArena<String> = ChunkArena::new();
//!
//! let a = arena.push("alpha".to_string());
//! let b = arena.push("beta".to_string());
//!
//! assert_eq!(a, 0);
//! assert_eq!(b, 1);
//! assert_eq!(arena.get(a).map(String::as_str), Some("alpha"));
//! assert_eq!(arena.get(2), None);
//! ```
//!
//! ## Thread Safety
//!
//! `ChunkArena` is not thread-safe. It is embedded in the interner and
//! shares its single-threaded usage contract.
//!
//! ## Implementation Notes
//!
//! - Chunk capacity is a crate constant, not a tunable
//! - No removal and no in-place mutation of stored elements
//! - Out-of-range `get` returns `None` rather than reading a partial chunk

/// Number of elements per chunk.
///
/// A memory/indirection tradeoff: larger chunks amortize the per-chunk
/// allocation, smaller chunks waste less space in the final chunk.
pub const CHUNK_CAP: usize = 1024;

/// Append-only arena of fixed-capacity chunks with dense indices.
///
/// Element `i` lives at chunk `i / CHUNK_CAP`, offset `i % CHUNK_CAP`.
/// Chunk buffers are never resized after allocation, so stored elements
/// never move.
///
/// # Example
///
/// ```
/// use internkit::ds::{ChunkArena, CHUNK_CAP};
///
/// let mut arena: ChunkArena<u64> = ChunkArena::new();
/// for i in 0..CHUNK_CAP as u64 + 1 {
///     arena.push(i);
/// }
///
/// // One full chunk plus one element in the second
/// assert_eq!(arena.len(), CHUNK_CAP + 1);
/// assert_eq!(arena.chunk_count(), 2);
/// assert_eq!(arena.get(CHUNK_CAP), Some(&(CHUNK_CAP as u64)));
/// ```
#[derive(Debug)]
pub struct ChunkArena<T> {
    chunks: Vec<Vec<T>>,
    len: usize,
}

impl<T> ChunkArena<T> {
    /// Creates an empty arena. No chunks are allocated until the first push.
    pub fn new() -> Self {
        Self {
            chunks: Vec::new(),
            len: 0,
        }
    }

    /// Appends `value`, returning its dense index (`len` before the push).
    ///
    /// Allocates a fresh chunk when the previous one is full.
    ///
    /// # Example
    ///
    /// ```
    /// use internkit::ds::ChunkArena;
    ///
    /// let mut arena = ChunkArena::new();
    /// assert_eq!(arena.push('x'), 0);
    /// assert_eq!(arena.push('y'), 1);
    /// ```
    pub fn push(&mut self, value: T) -> usize {
        let index = self.len;
        if index % CHUNK_CAP == 0 {
            self.chunks.push(Vec::with_capacity(CHUNK_CAP));
        }
        self.chunks[index / CHUNK_CAP].push(value);
        self.len += 1;
        index
    }

    /// Returns the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(&self.chunks[index / CHUNK_CAP][index % CHUNK_CAP])
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total element slots across all allocated chunks.
    pub fn capacity(&self) -> usize {
        self.chunks.len() * CHUNK_CAP
    }

    /// Returns the number of allocated chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns an iterator over stored elements in insertion order.
    ///
    /// # Example
    ///
    /// ```
    /// use internkit::ds::ChunkArena;
    ///
    /// let mut arena = ChunkArena::new();
    /// arena.push(1);
    /// arena.push(2);
    /// arena.push(3);
    ///
    /// let values: Vec<_> = arena.iter().copied().collect();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.chunks.iter().flatten()
    }

    /// Returns an approximate structural memory footprint in bytes.
    ///
    /// Counts the arena's own bookkeeping and chunk buffers; heap data owned
    /// by the elements themselves (e.g. string bytes) is not included.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.chunks.capacity() * std::mem::size_of::<Vec<T>>()
            + self.chunks.len() * CHUNK_CAP * std::mem::size_of::<T>()
    }
}

impl<T> Default for ChunkArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_dense_indices() {
        let mut arena = ChunkArena::new();
        assert_eq!(arena.push("a"), 0);
        assert_eq!(arena.push("b"), 1);
        assert_eq!(arena.push("c"), 2);
        assert_eq!(arena.len(), 3);
        assert!(!arena.is_empty());
    }

    #[test]
    fn get_round_trips_pushed_values() {
        let mut arena = ChunkArena::new();
        let a = arena.push(10u64);
        let b = arena.push(20u64);
        assert_eq!(arena.get(a), Some(&10));
        assert_eq!(arena.get(b), Some(&20));
    }

    #[test]
    fn get_out_of_range_returns_none() {
        let mut arena = ChunkArena::new();
        assert_eq!(arena.get(0), None);
        arena.push(1u8);
        assert_eq!(arena.get(0), Some(&1));
        assert_eq!(arena.get(1), None);
        assert_eq!(arena.get(usize::MAX), None);
    }

    #[test]
    fn empty_arena_has_no_chunks() {
        let arena: ChunkArena<String> = ChunkArena::new();
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.capacity(), 0);
        assert_eq!(arena.chunk_count(), 0);
        assert_eq!(arena.iter().count(), 0);
    }

    #[test]
    fn chunk_allocated_lazily_on_boundary() {
        let mut arena = ChunkArena::new();
        for i in 0..CHUNK_CAP {
            arena.push(i);
        }
        assert_eq!(arena.chunk_count(), 1);
        assert_eq!(arena.capacity(), CHUNK_CAP);

        arena.push(CHUNK_CAP);
        assert_eq!(arena.chunk_count(), 2);
        assert_eq!(arena.capacity(), 2 * CHUNK_CAP);
        assert_eq!(arena.get(CHUNK_CAP), Some(&CHUNK_CAP));
    }

    #[test]
    fn elements_straddling_chunks_resolve() {
        let mut arena = ChunkArena::new();
        let total = 3 * CHUNK_CAP + 7;
        for i in 0..total {
            assert_eq!(arena.push(i), i);
        }
        assert_eq!(arena.len(), total);
        assert_eq!(arena.chunk_count(), 4);
        for i in [0, 1, CHUNK_CAP - 1, CHUNK_CAP, 2 * CHUNK_CAP, total - 1] {
            assert_eq!(arena.get(i), Some(&i));
        }
    }

    #[test]
    fn iter_yields_insertion_order_across_chunks() {
        let mut arena = ChunkArena::new();
        let total = CHUNK_CAP + 5;
        for i in 0..total {
            arena.push(i);
        }
        let collected: Vec<_> = arena.iter().copied().collect();
        let expected: Vec<_> = (0..total).collect();
        assert_eq!(collected, expected);
    }

    #[test]
    fn addresses_stable_across_growth() {
        let mut arena = ChunkArena::new();
        arena.push("first".to_string());
        let before = arena.get(0).map(|s| s as *const String);

        // Force several chunk allocations and outer-Vec reallocations.
        for i in 0..4 * CHUNK_CAP {
            arena.push(format!("filler-{i}"));
        }

        let after = arena.get(0).map(|s| s as *const String);
        assert_eq!(before, after);
        assert_eq!(arena.get(0).map(String::as_str), Some("first"));
    }

    #[test]
    fn approx_bytes_grows_with_chunks() {
        let mut arena: ChunkArena<u64> = ChunkArena::new();
        let empty = arena.approx_bytes();
        for i in 0..CHUNK_CAP as u64 + 1 {
            arena.push(i);
        }
        assert!(arena.approx_bytes() >= empty + 2 * CHUNK_CAP * std::mem::size_of::<u64>());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: behavior matches a reference Vec push/get model
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_reference_vec(
            values in prop::collection::vec(any::<u32>(), 0..200)
        ) {
            let mut arena = ChunkArena::new();
            let mut reference = Vec::new();

            for v in values {
                let index = arena.push(v);
                reference.push(v);
                prop_assert_eq!(index, reference.len() - 1);
                prop_assert_eq!(arena.len(), reference.len());
            }

            for (i, v) in reference.iter().enumerate() {
                prop_assert_eq!(arena.get(i), Some(v));
            }
            prop_assert_eq!(arena.get(reference.len()), None);

            let collected: Vec<_> = arena.iter().copied().collect();
            prop_assert_eq!(collected, reference);
        }

        /// Property: capacity is always a whole number of chunks covering len
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_capacity_covers_len(count in 0usize..3000) {
            let mut arena = ChunkArena::new();
            for i in 0..count {
                arena.push(i);
            }
            prop_assert_eq!(arena.capacity() % CHUNK_CAP, 0);
            prop_assert!(arena.capacity() >= arena.len());
            prop_assert!(arena.capacity() < arena.len() + CHUNK_CAP);
            prop_assert_eq!(arena.chunk_count(), count.div_ceil(CHUNK_CAP));
        }
    }
}
