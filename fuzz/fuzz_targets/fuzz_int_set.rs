#![no_main]

use std::collections::BTreeSet;

use libfuzzer_sys::fuzz_target;

use intset::IntSet;

// Interprets a byte stream as an operation sequence against two `IntSet`s,
// checking every result against a pair of `BTreeSet<usize>` models.
//
// Byte layout: `(opcode, operand)` pairs. Operands address elements
// `operand * 4`, so values span 0..1020 (16 words) and sets of very different
// word lengths meet in the algebra ops.
// - 0 → `a.insert(x)`
// - 1 → `a.remove(x)`
// - 2 → `b.insert(x)`
// - 3 → `a.contains(x)`
// - 4 → `a.union_with(&b)`
// - 5 → `a.intersect_with(&b)`
// - 6 → `a.difference_with(&b)`
// - 7 → `a.symmetric_difference_with(&b)`
// - 8 → `b.clear()`
// - 9 → `b.remove(x)` (leaves trailing zero words in `b`)
// - 10 → `a.len()` / `a.elems()` / `a.to_string()`
fuzz_target!(|data: &[u8]| {
    let mut a = IntSet::new();
    let mut b = IntSet::new();
    let mut model_a = BTreeSet::new();
    let mut model_b = BTreeSet::new();

    let mut i = 0;
    while i + 1 < data.len() {
        let opcode = data[i];
        let x = data[i + 1] as usize * 4;
        i += 2;

        match opcode % 11 {
            0 => {
                assert_eq!(a.insert(x), model_a.insert(x), "insert({x}) mismatch");
            }
            1 => {
                assert_eq!(a.remove(x), model_a.remove(&x), "remove({x}) mismatch");
            }
            2 => {
                b.insert(x);
                model_b.insert(x);
            }
            3 => {
                assert_eq!(a.contains(x), model_a.contains(&x), "contains({x}) mismatch");
            }
            4 => {
                a.union_with(&b);
                model_a = model_a.union(&model_b).copied().collect();
            }
            5 => {
                a.intersect_with(&b);
                model_a = model_a.intersection(&model_b).copied().collect();
            }
            6 => {
                a.difference_with(&b);
                model_a = model_a.difference(&model_b).copied().collect();
            }
            7 => {
                a.symmetric_difference_with(&b);
                model_a = model_a.symmetric_difference(&model_b).copied().collect();
            }
            8 => {
                b.clear();
                model_b.clear();
            }
            9 => {
                assert_eq!(b.remove(x), model_b.remove(&x), "b.remove({x}) mismatch");
            }
            _ => {
                let expected: Vec<usize> = model_a.iter().copied().collect();
                assert_eq!(a.len(), expected.len(), "len() mismatch");
                let rendered: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
                assert_eq!(
                    a.to_string(),
                    format!("{{{}}}", rendered.join(" ")),
                    "to_string() mismatch"
                );
                assert_eq!(a.elems(), expected, "elems() mismatch");
            }
        }
    }

    // Final consistency check.
    let expected: Vec<usize> = model_a.iter().copied().collect();
    assert_eq!(a.elems(), expected, "final elems mismatch");
    let rendered: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(a.to_string(), format!("{{{}}}", rendered.join(" ")));
});
