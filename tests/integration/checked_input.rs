//! Signed-input entry points and their `InvalidElement` failures.

use std::error::Error;

use intset::{IntSet, IntSetError};

#[test]
fn negative_insert_fails_fast_and_leaves_set_unchanged() {
    let mut a = IntSet::new();
    a.try_insert_all([1, 9, 144]).unwrap();

    let err = a.try_insert(-7).unwrap_err();
    assert_eq!(err, IntSetError::InvalidElement { value: -7 });
    assert_eq!(a.to_string(), "{1 9 144}");
}

#[test]
fn every_positional_operation_rejects_negatives() {
    let mut a: IntSet = [0, 1].into_iter().collect();

    assert!(matches!(
        a.try_contains(-1),
        Err(IntSetError::InvalidElement { value: -1 })
    ));
    assert!(matches!(
        a.try_remove(-1),
        Err(IntSetError::InvalidElement { value: -1 })
    ));
    assert!(matches!(
        a.try_insert_all([2, -1]),
        Err(IntSetError::InvalidElement { value: -1 })
    ));
    assert_eq!(a.elems(), vec![0, 1]);
}

#[test]
fn checked_and_unchecked_agree_on_valid_input() {
    let mut checked = IntSet::new();
    let mut unchecked = IntSet::new();

    for x in [0i64, 63, 64, 65, 1000] {
        assert_eq!(checked.try_insert(x), Ok(unchecked.insert(x as usize)));
    }
    assert_eq!(checked, unchecked);
    assert_eq!(checked.try_remove(64), Ok(true));
    assert_eq!(checked.try_contains(64), Ok(false));
}

#[test]
fn error_renders_and_boxes() {
    let err: Box<dyn Error + Send + Sync> = Box::new(IntSetError::InvalidElement { value: -42 });
    assert_eq!(err.to_string(), "invalid element -42: must be non-negative");
    assert!(err.source().is_none());
}
