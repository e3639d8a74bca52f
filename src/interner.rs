//! Open-addressing string interner with dense integer symbols.
//!
//! Maps strings to [`SymbolId`]s and back. Identical strings always receive
//! the same symbol, symbols are assigned densely starting at zero, and a
//! symbol stays valid for the life of the interner. Interning replaces
//! repeated string comparison and storage with integer comparison and
//! compact storage, which pays off in graph algorithms, parsers, and any
//! workload with many repeated keys.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       StringInterner Layout                             │
//! │                                                                         │
//! │   slots: Vec<Slot>             power-of-two length, linear probing      │
//! │   ┌──────┬──────┬──────┬──────┬──────┬──────┐                           │
//! │   │ h,s₂ │  —   │ h,s₀ │ h,s₁ │  —   │  —   │   Slot = (hash: u32,     │
//! │   └──────┴──────┴──────┴──────┴──────┴──────┘    sym: Option<SymbolId>) │
//! │                    │                                                    │
//! │                    ▼ sym.to_usize()                                     │
//! │   arena: ChunkArena<Box<str>>                                           │
//! │   ┌───────────────────────┬───────────────────────┐                     │
//! │   │ chunk 0: s₀ s₁ … s₁₀₂₃│ chunk 1: s₁₀₂₄ …      │                     │
//! │   └───────────────────────┴───────────────────────┘                     │
//! │                                                                         │
//! │   intern("x") Flow                                                      │
//! │   ────────────────                                                      │
//! │                                                                         │
//! │   1. grow_if_needed()            len >= threshold → double + rehash     │
//! │   2. hash = fnv1a_32("x")                                               │
//! │   3. cursor = hash & (slots.len() - 1)                                  │
//! │   4. probe: occupied slot with matching hash + string → hit             │
//! │             occupied otherwise → clash, step to next slot               │
//! │             empty slot → miss: arena.push, claim slot                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - [`StringInterner`]: the interning table
//! - [`SymbolId`]: dense, zero-based symbol handle
//!
//! ## Example Usage
//!
//! ```
//! use internkit::interner::StringInterner;
//!
//! let mut interner = StringInterner::new();
//!
//! let apple = interner.intern("apple");
//! let banana = interner.intern("banana");
//!
//! // Dense, zero-based, first-appearance order
//! assert_eq!(apple.to_usize(), 0);
//! assert_eq!(banana.to_usize(), 1);
//!
//! // Idempotent
//! assert_eq!(interner.intern("apple"), apple);
//! assert_eq!(interner.len(), 2);
//!
//! // Round trip
//! assert_eq!(interner.resolve(apple), Some("apple"));
//! ```
//!
//! ## Thread Safety
//!
//! `StringInterner` is not thread-safe and has no internal synchronization.
//! `intern` takes `&mut self`, so the borrow checker already rules out
//! concurrent mutation through a shared instance; callers that need a shared
//! table must serialize access externally or shard into separate instances.
//!
//! ## Implementation Notes
//!
//! - Slots cache the 32-bit FNV-1a hash, so growth re-places entries without
//!   re-hashing and probe chains skip most false candidates on one compare
//! - Growth doubles the slot array in place and rehashes; the arena is
//!   untouched, so symbols and stored strings survive every growth
//! - The symbol space is capped at `i32::MAX`; minting past the cap panics

use std::fmt;
use std::num::NonZeroU32;

use crate::ds::ChunkArena;
use crate::error::ConfigError;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::InternerMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::InternerMetricsSnapshot;

/// Smallest slot-array capacity. Requested capacities below this are raised
/// to it before power-of-two rounding.
pub const MIN_CAPACITY: usize = 16;

/// Load factor used by the convenience constructors.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.7;

/// Hard cap on the number of distinct symbols one interner can mint.
pub const MAX_SYMBOLS: usize = i32::MAX as usize;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// FNV-1a over the string's byte view. 32-bit so the cached copy in each
/// slot stays small; deterministic across instances and processes.
fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

// ---------------------------------------------------------------------------
// SymbolId
// ---------------------------------------------------------------------------

/// Dense handle for an interned string.
///
/// Symbols are zero-based in order of first appearance: the first distinct
/// string interned gets index 0, the next gets 1, and so on. A symbol is
/// only meaningful to the interner that minted it.
///
/// Internally the handle stores `index + 1` in a `NonZeroU32`, so
/// `Option<SymbolId>` is four bytes and a bucket slot can represent
/// "empty" as an explicit `None` at no space cost.
///
/// # Example
///
/// ```
/// use internkit::interner::StringInterner;
///
/// let mut interner = StringInterner::new();
/// let sym = interner.intern("first");
///
/// assert_eq!(sym.to_usize(), 0);
/// assert_eq!(sym.to_u32(), 0);
/// assert_eq!(sym.to_string(), "0");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(NonZeroU32);

impl SymbolId {
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < MAX_SYMBOLS);
        match NonZeroU32::new(index as u32 + 1) {
            Some(raw) => Self(raw),
            None => unreachable!("symbol index exceeds the u32 range"),
        }
    }

    pub(crate) fn try_from_index(index: usize) -> Option<Self> {
        (index < MAX_SYMBOLS).then(|| Self::from_index(index))
    }

    /// Returns the symbol's dense, zero-based index.
    pub fn to_usize(self) -> usize {
        self.0.get() as usize - 1
    }

    /// Returns the symbol's dense, zero-based index as a `u32`.
    pub fn to_u32(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SymbolId").field(&self.to_usize()).finish()
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_usize().fmt(f)
    }
}

// ---------------------------------------------------------------------------
// StringInterner
// ---------------------------------------------------------------------------

/// One bucket of the open-addressing index. `sym: None` means the slot has
/// never been written; the cached hash makes growth and probe rejection
/// cheap.
#[derive(Debug, Clone, Copy)]
struct Slot {
    hash: u32,
    sym: Option<SymbolId>,
}

impl Slot {
    const EMPTY: Self = Self { hash: 0, sym: None };
}

/// Open-addressing string interner.
///
/// Resolves `string -> SymbolId` in expected O(1) via linear probing over a
/// power-of-two slot array, and `SymbolId -> &str` in O(1) via a chunked
/// arena. Capacity grows by doubling once the stored count reaches
/// `load_factor * capacity`; strings are only ever added.
///
/// # Example
///
/// ```
/// use internkit::interner::StringInterner;
///
/// let mut interner = StringInterner::with_capacity(128);
///
/// let hat = interner.intern("hat");
/// let coat = interner.intern("coat");
///
/// assert_ne!(hat, coat);
/// assert_eq!(interner.len(), 2);
/// assert_eq!(interner.capacity(), 128);
/// assert_eq!(interner.lookup("hat"), Some(hat));
/// assert_eq!(interner.lookup("scarf"), None);
/// ```
#[derive(Debug)]
pub struct StringInterner {
    slots: Vec<Slot>,
    arena: ChunkArena<Box<str>>,
    load_factor: f64,
    threshold: usize,
    clashes: u64,
    #[cfg(feature = "metrics")]
    metrics: InternerMetrics,
}

impl StringInterner {
    /// Creates an interner with the minimum capacity and the default load
    /// factor.
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an interner with at least `capacity` slots and the default
    /// load factor.
    ///
    /// The capacity is raised to [`MIN_CAPACITY`] and rounded up to the next
    /// power of two.
    ///
    /// # Example
    ///
    /// ```
    /// use internkit::interner::StringInterner;
    ///
    /// assert_eq!(StringInterner::with_capacity(0).capacity(), 16);
    /// assert_eq!(StringInterner::with_capacity(63).capacity(), 64);
    /// assert_eq!(StringInterner::with_capacity(65).capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an interner with explicit capacity and load factor.
    ///
    /// # Panics
    ///
    /// Panics if the load factor is invalid. See
    /// [`try_with_capacity_and_load_factor`](Self::try_with_capacity_and_load_factor).
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        match Self::try_with_capacity_and_load_factor(capacity, load_factor) {
            Ok(interner) => interner,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates an interner with explicit capacity and load factor, returning
    /// an error on invalid parameters.
    ///
    /// A higher load factor packs slots denser at the price of more clashes;
    /// a lower one trades memory for shorter probe chains.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `load_factor` is not finite or lies
    /// outside the open interval `(0.0, 1.0)`.
    ///
    /// # Example
    ///
    /// ```
    /// use internkit::interner::StringInterner;
    ///
    /// assert!(StringInterner::try_with_capacity_and_load_factor(64, 0.7).is_ok());
    /// assert!(StringInterner::try_with_capacity_and_load_factor(64, 1.0).is_err());
    /// assert!(StringInterner::try_with_capacity_and_load_factor(64, f64::NAN).is_err());
    /// ```
    pub fn try_with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f64,
    ) -> Result<Self, ConfigError> {
        if !load_factor.is_finite() || load_factor <= 0.0 || load_factor >= 1.0 {
            return Err(ConfigError::new(format!(
                "load factor must be in (0.0, 1.0), got {}",
                load_factor
            )));
        }
        let capacity = round_capacity(capacity);
        Ok(Self {
            slots: vec![Slot::EMPTY; capacity],
            arena: ChunkArena::new(),
            load_factor,
            threshold: (capacity as f64 * load_factor) as usize,
            clashes: 0,
            #[cfg(feature = "metrics")]
            metrics: InternerMetrics::default(),
        })
    }

    /// Returns the symbol for `value`, interning it if it is new.
    ///
    /// The same string always yields the same symbol; distinct strings get
    /// consecutive indices starting at 0. A hit performs no allocation.
    ///
    /// # Panics
    ///
    /// Panics if the interner already holds [`MAX_SYMBOLS`] distinct
    /// strings. A probe cycle finding no empty slot also panics; growth
    /// ahead of every insert makes that unreachable.
    ///
    /// # Example
    ///
    /// ```
    /// use internkit::interner::StringInterner;
    ///
    /// let mut interner = StringInterner::new();
    ///
    /// let a = interner.intern("alpha");
    /// let b = interner.intern("beta");
    /// let a_again = interner.intern("alpha");
    ///
    /// assert_eq!(a, a_again);
    /// assert_ne!(a, b);
    /// assert_eq!(b.to_usize(), 1);
    /// ```
    pub fn intern(&mut self, value: &str) -> SymbolId {
        self.grow_if_needed();
        #[cfg(feature = "metrics")]
        {
            self.metrics.intern_calls += 1;
        }

        let hash = fnv1a_32(value.as_bytes());
        let mask = self.slots.len() - 1;
        let mut cursor = hash as usize & mask;
        let start = cursor;

        while let Some(sym) = self.slots[cursor].sym {
            if self.slots[cursor].hash == hash && self.stored_str(sym) == value {
                #[cfg(feature = "metrics")]
                {
                    self.metrics.intern_hits += 1;
                }
                return sym;
            }
            self.clashes += 1;
            cursor = (cursor + 1) & mask;
            if cursor == start {
                // Growth ran before this probe; a full cycle means the
                // occupancy accounting is corrupt.
                panic!("string interner probe cycled with no empty slot");
            }
        }

        let sym = match SymbolId::try_from_index(self.arena.len()) {
            Some(sym) => sym,
            None => panic!("string interner symbol space exhausted ({MAX_SYMBOLS} symbols)"),
        };
        self.arena.push(Box::from(value));
        self.slots[cursor] = Slot {
            hash,
            sym: Some(sym),
        };
        #[cfg(feature = "metrics")]
        {
            self.metrics.intern_misses += 1;
        }
        sym
    }

    /// Returns the string for `sym` in O(1).
    ///
    /// Returns `None` only for a symbol minted by a different interner with
    /// more entries; symbols from this instance always resolve.
    ///
    /// # Example
    ///
    /// ```
    /// use internkit::interner::StringInterner;
    ///
    /// let mut interner = StringInterner::new();
    /// let sym = interner.intern("value");
    ///
    /// assert_eq!(interner.resolve(sym), Some("value"));
    /// ```
    pub fn resolve(&self, sym: SymbolId) -> Option<&str> {
        self.arena.get(sym.to_usize()).map(|s| &**s)
    }

    /// Returns the symbol for `value` without interning it.
    ///
    /// Read-only: no growth, no insertion, no clash accounting.
    pub fn lookup(&self, value: &str) -> Option<SymbolId> {
        #[cfg(feature = "metrics")]
        self.metrics.lookup_calls.incr();

        let hash = fnv1a_32(value.as_bytes());
        let mask = self.slots.len() - 1;
        let mut cursor = hash as usize & mask;
        let start = cursor;

        while let Some(sym) = self.slots[cursor].sym {
            if self.slots[cursor].hash == hash && self.stored_str(sym) == value {
                #[cfg(feature = "metrics")]
                self.metrics.lookup_hits.incr();
                return Some(sym);
            }
            cursor = (cursor + 1) & mask;
            if cursor == start {
                break;
            }
        }

        #[cfg(feature = "metrics")]
        self.metrics.lookup_misses.incr();
        None
    }

    /// Returns the number of distinct strings stored.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the current slot-array capacity. Always a power of two; only
    /// ever grows.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the configured load factor.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the cumulative count of probe steps that landed on an
    /// occupied, non-matching slot.
    ///
    /// A diagnostic for hash quality and load-factor tuning; clashes only
    /// lengthen probes, they never affect correctness.
    pub fn clashes(&self) -> u64 {
        self.clashes
    }

    /// Returns an iterator over `(symbol, string)` pairs in symbol order.
    ///
    /// # Example
    ///
    /// ```
    /// use internkit::interner::StringInterner;
    ///
    /// let mut interner = StringInterner::new();
    /// interner.intern("a");
    /// interner.intern("b");
    ///
    /// let indices: Vec<usize> = interner.iter().map(|(sym, _)| sym.to_usize()).collect();
    /// assert_eq!(indices, vec![0, 1]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> {
        self.arena
            .iter()
            .enumerate()
            .map(|(index, value)| (SymbolId::from_index(index), &**value))
    }

    /// Returns an approximate structural memory footprint in bytes: the slot
    /// array plus arena bookkeeping. The interned bytes themselves are not
    /// counted.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.slots.capacity() * std::mem::size_of::<Slot>()
            + self.arena.approx_bytes()
    }

    /// Verifies internal invariants, returning the first violation found.
    ///
    /// Available in debug and test builds.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if !self.slots.len().is_power_of_two() {
            return Err(InvariantError::new(format!(
                "slot array length {} is not a power of two",
                self.slots.len()
            )));
        }
        let mut occupied = 0usize;
        for (i, slot) in self.slots.iter().enumerate() {
            let Some(sym) = slot.sym else { continue };
            occupied += 1;
            let Some(value) = self.arena.get(sym.to_usize()) else {
                return Err(InvariantError::new(format!(
                    "slot {i} holds out-of-range symbol {sym:?}"
                )));
            };
            if fnv1a_32(value.as_bytes()) != slot.hash {
                return Err(InvariantError::new(format!(
                    "slot {i} cached hash does not match stored string {value:?}"
                )));
            }
        }
        if occupied != self.arena.len() {
            return Err(InvariantError::new(format!(
                "{} occupied slots for {} stored strings",
                occupied,
                self.arena.len()
            )));
        }
        Ok(())
    }

    /// Returns a point-in-time copy of the operation counters and gauges.
    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> InternerMetricsSnapshot {
        InternerMetricsSnapshot {
            intern_calls: self.metrics.intern_calls,
            intern_hits: self.metrics.intern_hits,
            intern_misses: self.metrics.intern_misses,
            grow_events: self.metrics.grow_events,
            rehashed_slots: self.metrics.rehashed_slots,
            lookup_calls: self.metrics.lookup_calls.get(),
            lookup_hits: self.metrics.lookup_hits.get(),
            lookup_misses: self.metrics.lookup_misses.get(),
            len: self.len(),
            capacity: self.capacity(),
            clashes: self.clashes,
            arena_chunks: self.arena.chunk_count(),
        }
    }

    /// Resets all operation counters. Gauges are unaffected.
    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.metrics = InternerMetrics::default();
    }

    /// Occupied slots always hold in-range symbols; anything else means the
    /// table is corrupt.
    fn stored_str(&self, sym: SymbolId) -> &str {
        match self.arena.get(sym.to_usize()) {
            Some(value) => value,
            None => panic!("occupied slot holds out-of-range symbol {sym:?}"),
        }
    }

    /// Doubles the slot array once the stored count reaches the threshold,
    /// re-placing every occupied slot by its cached hash. Runs before each
    /// insert attempt so the probe loop always finds a free slot. The arena
    /// is untouched.
    fn grow_if_needed(&mut self) {
        if self.arena.len() < self.threshold {
            return;
        }

        let new_len = self.slots.len() * 2;
        self.threshold = (new_len as f64 * self.load_factor) as usize;
        let old_slots = std::mem::replace(&mut self.slots, vec![Slot::EMPTY; new_len]);
        let mask = new_len - 1;

        for slot in old_slots {
            if slot.sym.is_none() {
                continue;
            }
            // No equality checks: old occupants are known distinct.
            let mut cursor = slot.hash as usize & mask;
            while self.slots[cursor].sym.is_some() {
                cursor = (cursor + 1) & mask;
            }
            self.slots[cursor] = slot;
            #[cfg(feature = "metrics")]
            {
                self.metrics.rehashed_slots += 1;
            }
        }
        #[cfg(feature = "metrics")]
        {
            self.metrics.grow_events += 1;
        }
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

fn round_capacity(capacity: usize) -> usize {
    capacity.max(MIN_CAPACITY).next_power_of_two()
}
