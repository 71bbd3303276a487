//! Bit-packed set of small non-negative integers.
//!
//! ## Scope
//! [`IntSet`] stores membership of integer `x` as bit `x % 64` of word
//! `x / 64` in a growable `Vec<u64>`. It supports membership queries, insertion,
//! removal and in-place set algebra (union, intersection, difference,
//! symmetric difference) that runs one word at a time.
//!
//! ## Key invariants
//! - An element is present iff its bit is set; elements past the last word are
//!   absent.
//! - Trailing zero words are allowed and never observable: equality, hashing,
//!   rendering and every operation treat them as missing words.
//! - Algebra accepts operands of any relative length. Intersection zeroes the
//!   receiver's words past the end of the operand.
//! - The word width is fixed at 64 bits on every target.
//!
//! ## Notable entry points
//! - `IntSet::insert` / `contains` / `remove`: element operations on `usize`.
//! - `IntSet::try_insert` and friends: signed input, rejecting negatives with
//!   [`IntSetError::InvalidElement`].
//! - `IntSet::union_with` / `intersect_with` / `difference_with` /
//!   `symmetric_difference_with`: in-place algebra, chainable.
//! - `Display` renders `{1 9 144}`.

pub mod stdx;
#[cfg(test)]
pub mod test_utils;

pub use stdx::{words_for_elem, IntSet, IntSetError, IntSetIter, WORD_BITS};
