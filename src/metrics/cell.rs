use std::cell::Cell;

/// A metrics-only counter cell.
///
/// Lets read-path methods that take `&self` (e.g. `lookup`) record counts
/// without requiring `&mut`. Not synchronized: the interner's single-thread
/// usage contract covers its metrics too, and the cell keeps the containing
/// type `!Sync` so that contract is compiler-enforced.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}
