#![no_main]

use internkit::interner::{StringInterner, SymbolId};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on StringInterner
//
// Tests random sequences of intern, lookup, resolve, and iter operations.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut interner = StringInterner::with_capacity(16);
    let mut all_syms: Vec<(SymbolId, String)> = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 4;
        let arg = data[idx + 1];
        idx += 2;

        let take = (arg as usize % 5).min(data.len() - idx);
        let value = String::from_utf8_lossy(&data[idx..idx + take]).into_owned();
        idx += take;

        match op {
            0 => {
                // intern
                let len_before = interner.len();
                let known = interner.lookup(&value).is_some();
                let sym = interner.intern(&value);

                if known {
                    assert_eq!(interner.len(), len_before);
                } else {
                    assert_eq!(interner.len(), len_before + 1);
                    assert_eq!(sym.to_usize(), len_before);
                    all_syms.push((sym, value.clone()));
                }
                assert_eq!(interner.resolve(sym), Some(value.as_str()));
            }
            1 => {
                // lookup (read-only)
                let len_before = interner.len();
                let clashes_before = interner.clashes();
                let _ = interner.lookup(&value);
                assert_eq!(interner.len(), len_before);
                assert_eq!(interner.clashes(), clashes_before);
            }
            2 => {
                // resolve a previously minted symbol
                if !all_syms.is_empty() {
                    let pick = arg as usize % all_syms.len();
                    let (sym, ref expected) = all_syms[pick];
                    assert_eq!(interner.resolve(sym), Some(expected.as_str()));
                }
            }
            3 => {
                // iter agrees with the mint log
                assert_eq!(interner.iter().count(), interner.len());
                for ((sym, value), (expected_sym, expected_value)) in
                    interner.iter().zip(all_syms.iter())
                {
                    assert_eq!(sym, *expected_sym);
                    assert_eq!(value, expected_value.as_str());
                }
            }
            _ => unreachable!(),
        }

        // Structural gauges hold after every operation
        assert!(interner.capacity().is_power_of_two());
        assert!(interner.capacity() >= 16);
    }
});
