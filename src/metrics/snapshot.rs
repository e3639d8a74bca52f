/// Point-in-time copy of the interner's counters and gauges.
///
/// Produced by `StringInterner::metrics_snapshot`. Counters accumulate since
/// construction (or the last reset); gauges describe the table at snapshot
/// time.
#[derive(Debug, Default, Clone, Copy)]
pub struct InternerMetricsSnapshot {
    pub intern_calls: u64,
    pub intern_hits: u64,
    pub intern_misses: u64,
    pub grow_events: u64,
    pub rehashed_slots: u64,

    pub lookup_calls: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
    pub clashes: u64,
    pub arena_chunks: usize,
}
