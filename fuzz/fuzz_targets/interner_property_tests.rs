#![no_main]

use internkit::interner::StringInterner;
use libfuzzer_sys::fuzz_target;

// Fuzz property-based tests for StringInterner
//
// Tests specific invariants and properties:
// - Dense, monotonic symbol assignment
// - Idempotency of intern
// - Bidirectional mapping correctness
// - Lookup/intern consistency
// - Stability across growth
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let test_type = data[0] % 5;

    match test_type {
        0 => test_dense_symbols(&data[1..]),
        1 => test_intern_idempotency(&data[1..]),
        2 => test_bidirectional_mapping(&data[1..]),
        3 => test_lookup_consistency(&data[1..]),
        4 => test_growth_stability(&data[1..]),
        _ => unreachable!(),
    }
});

fn fuzz_strings(data: &[u8]) -> impl Iterator<Item = String> + '_ {
    data.chunks(3).map(|chunk| String::from_utf8_lossy(chunk).into_owned())
}

// Property: new strings get sequential indices starting from 0
fn test_dense_symbols(data: &[u8]) {
    let mut interner = StringInterner::new();
    let mut next_index = 0usize;

    for value in fuzz_strings(data) {
        if interner.lookup(&value).is_none() {
            let sym = interner.intern(&value);
            assert_eq!(sym.to_usize(), next_index);
            next_index += 1;
        } else {
            let sym = interner.intern(&value);
            assert!(sym.to_usize() < next_index);
        }
        assert_eq!(interner.len(), next_index);
    }
}

// Property: intern is idempotent - same string always returns same symbol
fn test_intern_idempotency(data: &[u8]) {
    let mut interner = StringInterner::new();

    for value in fuzz_strings(data) {
        let sym1 = interner.intern(&value);
        let sym2 = interner.intern(&value);
        let sym3 = interner.intern(&value);

        assert_eq!(sym1, sym2);
        assert_eq!(sym2, sym3);
    }
}

// Property: intern -> resolve roundtrip returns the original string
fn test_bidirectional_mapping(data: &[u8]) {
    let mut interner = StringInterner::new();

    for value in fuzz_strings(data) {
        let sym = interner.intern(&value);
        assert_eq!(interner.resolve(sym), Some(value.as_str()));
    }
}

// Property: lookup agrees with intern without mutating the table
fn test_lookup_consistency(data: &[u8]) {
    let mut interner = StringInterner::new();

    for value in fuzz_strings(data) {
        let len_before = interner.len();
        let seen = interner.lookup(&value);
        // lookup never inserts
        assert_eq!(interner.len(), len_before);

        let sym = interner.intern(&value);
        if let Some(existing) = seen {
            assert_eq!(existing, sym);
            assert_eq!(interner.len(), len_before);
        } else {
            assert_eq!(interner.len(), len_before + 1);
        }
        assert_eq!(interner.lookup(&value), Some(sym));
    }
}

// Property: symbols minted early stay valid across arbitrary growth
fn test_growth_stability(data: &[u8]) {
    let mut interner = StringInterner::with_capacity(16);
    let mut minted: Vec<(internkit::interner::SymbolId, String)> = Vec::new();

    for value in fuzz_strings(data) {
        let sym = interner.intern(&value);
        if interner.resolve(sym) == Some(value.as_str()) {
            minted.push((sym, value));
        }

        // Every previously minted symbol still resolves to its string.
        for (old_sym, old_value) in &minted {
            assert_eq!(interner.resolve(*old_sym), Some(old_value.as_str()));
        }
    }

    assert!(interner.capacity().is_power_of_two());
}
