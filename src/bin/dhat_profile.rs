//! DHAT heap profiler for internkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::collections::HashMap;

use internkit::interner::StringInterner;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Formats a UUID-shaped string from two random words.
fn pseudo_uuid(rng: &mut XorShift64) -> String {
    let hi = rng.next_u64();
    let lo = rng.next_u64();
    format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        (hi >> 32) as u32,
        (hi >> 16) as u16,
        hi as u16,
        (lo >> 48) as u16,
        lo & 0xffff_ffff_ffff
    )
}

/// Intern `count` distinct UUID-shaped strings.
fn profile_unique_strings(count: usize) {
    println!("=== Profiling interner: {count} unique strings ===");
    let mut rng = XorShift64::new(42);
    let mut interner = StringInterner::with_capacity(1024);

    for _ in 0..count {
        let value = pseudo_uuid(&mut rng);
        interner.intern(&value);
    }

    println!("  len: {}", interner.len());
    println!("  cap: {}", interner.capacity());
    println!("  clashes: {}", interner.clashes());
    println!("  approx structural bytes: {}", interner.approx_bytes());
}

/// Re-intern a hot set: 90% of calls hit 10% of a fixed key universe.
fn profile_hotset(operations: usize, universe: usize) {
    println!("=== Profiling interner: hotset, {operations} ops over {universe} keys ===");
    let mut rng = XorShift64::new(42);
    let keys: Vec<String> = {
        let mut key_rng = XorShift64::new(7);
        (0..universe).map(|_| pseudo_uuid(&mut key_rng)).collect()
    };
    let hot = universe / 10;

    let mut interner = StringInterner::with_capacity(universe);
    for _ in 0..operations {
        let index = if rng.next_u64() % 10 < 9 {
            (rng.next_u64() as usize) % hot.max(1)
        } else {
            hot + (rng.next_u64() as usize) % (universe - hot).max(1)
        };
        interner.intern(&keys[index]);
    }

    println!("  len: {}", interner.len());
    println!("  cap: {}", interner.capacity());
    println!("  clashes: {}", interner.clashes());
}

/// The obvious map+vec interner, for a RAM comparison under the same load.
fn profile_naive_baseline(count: usize) {
    println!("=== Profiling naive map+vec baseline: {count} unique strings ===");
    let mut rng = XorShift64::new(42);
    let mut index: HashMap<String, u32> = HashMap::new();
    let mut values: Vec<String> = Vec::new();

    for _ in 0..count {
        let value = pseudo_uuid(&mut rng);
        if !index.contains_key(&value) {
            let id = values.len() as u32;
            values.push(value.clone());
            index.insert(value, id);
        }
    }

    println!("  len: {}", values.len());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("internkit DHAT Heap Profiling");
    println!("=============================\n");

    profile_unique_strings(500_000);
    profile_hotset(1_000_000, 100_000);
    profile_naive_baseline(500_000);

    println!("\n=============================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
