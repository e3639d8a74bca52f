use crate::metrics::cell::MetricsCell;

/// Live counter block owned by the interner.
///
/// Write-path counters are plain `u64` (those methods take `&mut self`);
/// read-path counters use [`MetricsCell`] so `lookup(&self)` can record.
#[derive(Debug, Default)]
pub struct InternerMetrics {
    pub intern_calls: u64,
    pub intern_hits: u64,
    pub intern_misses: u64,
    pub grow_events: u64,
    pub rehashed_slots: u64,

    pub lookup_calls: MetricsCell,
    pub lookup_hits: MetricsCell,
    pub lookup_misses: MetricsCell,
}

impl std::fmt::Display for InternerMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hit_rate = if self.intern_calls > 0 {
            100.0 * self.intern_hits as f64 / self.intern_calls as f64
        } else {
            0.0
        };
        write!(
            f,
            "InternerMetrics {{ interns: {}, hits: {}, misses: {}, hit_rate: {:.2}%, \
             lookups: {}, grows: {}, rehashed: {} }}",
            self.intern_calls,
            self.intern_hits,
            self.intern_misses,
            hit_rate,
            self.lookup_calls.get(),
            self.grow_events,
            self.rehashed_slots,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_counts() {
        let mut metrics = InternerMetrics::default();
        metrics.intern_calls = 4;
        metrics.intern_hits = 1;
        metrics.intern_misses = 3;
        metrics.lookup_calls.incr();

        let text = metrics.to_string();
        assert!(text.contains("interns: 4"));
        assert!(text.contains("hits: 1"));
        assert!(text.contains("hit_rate: 25.00%"));
        assert!(text.contains("lookups: 1"));
    }

    #[test]
    fn display_handles_zero_calls() {
        let text = InternerMetrics::default().to_string();
        assert!(text.contains("hit_rate: 0.00%"));
    }

    #[test]
    fn cell_counters_increment_through_shared_ref() {
        let metrics = InternerMetrics::default();
        metrics.lookup_calls.incr();
        metrics.lookup_calls.incr();
        assert_eq!(metrics.lookup_calls.get(), 2);
    }
}
