#![no_main]

use std::collections::HashMap;

use internkit::interner::StringInterner;
use libfuzzer_sys::fuzz_target;

// Fuzz stress test with heavy intern operations and reference validation
//
// Runs the interner against a reference HashMap + Vec implementation to
// ensure symbol assignment and bidirectional mapping stay correct across
// growth and collisions.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut interner = StringInterner::with_capacity(16);
    let mut reference: HashMap<String, usize> = HashMap::new();
    let mut stored: Vec<String> = Vec::new();

    for chunk in data.chunks(2) {
        let value = String::from_utf8_lossy(chunk).into_owned();

        let sym = interner.intern(&value);

        if let Some(&expected_index) = reference.get(&value) {
            // Known string - must return the same symbol
            assert_eq!(sym.to_usize(), expected_index);
        } else {
            // New string - must get the next sequential index
            assert_eq!(sym.to_usize(), stored.len());
            reference.insert(value.clone(), stored.len());
            stored.push(value.clone());
        }

        // Length matches the reference at every step
        assert_eq!(interner.len(), stored.len());

        // Every stored string still maps both ways
        for (ref_value, &ref_index) in &reference {
            let ref_sym = interner.lookup(ref_value);
            assert_eq!(ref_sym.map(|s| s.to_usize()), Some(ref_index));
        }
        for (index, ref_value) in stored.iter().enumerate() {
            let sym = interner
                .lookup(ref_value)
                .unwrap_or_else(|| panic!("stored string {index} lost"));
            assert_eq!(interner.resolve(sym), Some(ref_value.as_str()));
        }
    }

    // Final validation
    assert_eq!(interner.len(), stored.len());
    assert!(interner.capacity() >= stored.len());
});
