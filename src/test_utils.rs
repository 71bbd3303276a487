//! Shared helpers for unit and property tests.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::stdx::IntSet;

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
}

fn is_ci() -> bool {
    std::env::var_os("CI").is_some()
}

/// Case count for a proptest block.
///
/// `PROPTEST_CASES` wins when set. On CI the suite's own default is used;
/// locally it is capped at 4 so `cargo test --features stdx-proptest` stays fast.
pub fn proptest_cases(default: u32) -> u32 {
    if let Some(value) = env_u32("PROPTEST_CASES") {
        return value.max(1);
    }
    if is_ci() {
        return default.max(1);
    }
    default.clamp(1, 4)
}

/// Builds a set from a slice of elements.
pub fn set_of(xs: &[usize]) -> IntSet {
    xs.iter().copied().collect()
}

pub fn hash_of(set: &IntSet) -> u64 {
    let mut hasher = DefaultHasher::new();
    set.hash(&mut hasher);
    hasher.finish()
}
