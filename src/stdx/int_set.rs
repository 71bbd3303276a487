//! Growable set of small non-negative integers packed into `u64` words.
//!
//! Element `x` lives at bit `x % WORD_BITS` of word `x / WORD_BITS`. The word
//! vector grows on demand and may carry trailing zero words. Every operation
//! treats a missing word and a zero word the same way, so trimmed and untrimmed
//! sets are interchangeable as operands, compare equal, and hash equally.
//!
//! The core API takes `usize` elements, which makes negative input
//! unrepresentable. Callers holding signed values go through the `try_*`
//! methods, which reject negatives with [`IntSetError::InvalidElement`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

/// Bits per backing word. Fixed at 64 on every target so word layouts and
/// test vectors do not depend on the host pointer width.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Computes the number of words needed to store element `x`.
pub const fn words_for_elem(x: usize) -> usize {
    x / WORD_BITS + 1
}

/// Word index and single-bit mask for element `x`.
#[inline(always)]
const fn locate(x: usize) -> (usize, u64) {
    (x / WORD_BITS, 1u64 << (x % WORD_BITS))
}

/// Errors returned by the checked (`try_*`) entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntSetError {
    /// The value is negative, or does not fit in `usize` on this target.
    InvalidElement { value: i64 },
}

impl fmt::Display for IntSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidElement { value } => {
                write!(f, "invalid element {value}: must be non-negative")
            }
        }
    }
}

impl std::error::Error for IntSetError {}

#[inline]
fn checked_elem(value: i64) -> Result<usize, IntSetError> {
    usize::try_from(value).map_err(|_| IntSetError::InvalidElement { value })
}

/// Set of small non-negative integers backed by a `Vec<u64>`.
///
/// The default value is the empty set and owns no allocation. Memory is
/// proportional to the largest element ever inserted, not to the element
/// count, so the type suits dense sets of small integers.
///
/// Cloning produces an independent deep copy.
///
/// # Examples
/// ```
/// use intset::IntSet;
///
/// let mut a = IntSet::new();
/// a.insert_all([1, 9, 144]);
/// let b: IntSet = [9, 42].into_iter().collect();
///
/// assert_eq!(a.clone().union_with(&b).to_string(), "{1 9 42 144}");
/// assert_eq!(a.clone().intersect_with(&b).to_string(), "{9}");
/// assert_eq!(a.len(), 3);
/// ```
#[derive(Clone, Default)]
pub struct IntSet {
    words: Vec<u64>,
}

impl IntSet {
    /// Creates an empty set without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Creates an empty set with storage preallocated for elements up to and
    /// including `max_elem`.
    ///
    /// # Panics
    /// Storage is `max_elem / 64 + 1` words. A `max_elem` near `usize::MAX`
    /// requests more memory than can be allocated: `Vec` panics with capacity
    /// overflow when the byte size exceeds `isize::MAX`, and aborts on
    /// allocation failure otherwise.
    pub fn with_capacity(max_elem: usize) -> Self {
        Self {
            words: Vec::with_capacity(words_for_elem(max_elem)),
        }
    }

    /// Returns the backing words, including any trailing zero words.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Returns the number of backing words.
    #[inline]
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Backing words with trailing zero words stripped.
    #[inline]
    fn live_words(&self) -> &[u64] {
        let live = self
            .words
            .iter()
            .rposition(|&word| word != 0)
            .map_or(0, |i| i + 1);
        &self.words[..live]
    }

    /// Returns whether `x` is a member. Elements past the last word are absent.
    #[inline]
    pub fn contains(&self, x: usize) -> bool {
        let (word_idx, mask) = locate(x);
        self.words
            .get(word_idx)
            .is_some_and(|&word| word & mask != 0)
    }

    /// Adds `x`, growing the word vector with zero words as needed.
    ///
    /// Returns `true` if `x` was not already present.
    ///
    /// # Panics
    /// Memory grows with the largest element, not the member count. Elements
    /// near `usize::MAX` request more memory than can be allocated, which
    /// panics with capacity overflow or aborts on allocation failure. The same
    /// applies to [`try_insert`](Self::try_insert) and
    /// [`insert_all`](Self::insert_all).
    #[inline]
    pub fn insert(&mut self, x: usize) -> bool {
        let (word_idx, mask) = locate(x);
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }
        let word = &mut self.words[word_idx];
        let added = *word & mask == 0;
        *word |= mask;
        debug_assert!(self.contains(x));
        added
    }

    /// Adds every element of `xs`, in order.
    pub fn insert_all<I>(&mut self, xs: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for x in xs {
            self.insert(x);
        }
    }

    /// Removes `x`. Never shrinks the word vector.
    ///
    /// Returns `true` if `x` was present.
    #[inline]
    pub fn remove(&mut self, x: usize) -> bool {
        let (word_idx, mask) = locate(x);
        let Some(word) = self.words.get_mut(word_idx) else {
            return false;
        };
        let present = *word & mask != 0;
        *word &= !mask;
        debug_assert!(!self.contains(x));
        present
    }

    /// Removes all elements and releases the backing storage.
    ///
    /// Afterwards the set is indistinguishable from [`IntSet::new`].
    #[inline]
    pub fn clear(&mut self) {
        self.words = Vec::new();
    }

    /// Drops trailing zero words and releases excess capacity.
    pub fn shrink_to_fit(&mut self) {
        let live = self.live_words().len();
        self.words.truncate(live);
        self.words.shrink_to_fit();
    }

    /// Sets `self` to `self ∪ other`.
    ///
    /// Words that only `other` has are appended verbatim; words that only
    /// `self` has are left untouched.
    pub fn union_with(&mut self, other: &IntSet) -> &mut Self {
        for (dst, &src) in self.words.iter_mut().zip(&other.words) {
            *dst |= src;
        }
        if let Some(tail) = other.words.get(self.words.len()..) {
            self.words.extend_from_slice(tail);
        }
        self
    }

    /// Sets `self` to `self ∩ other`.
    pub fn intersect_with(&mut self, other: &IntSet) -> &mut Self {
        let shared = self.words.len().min(other.words.len());
        for (dst, &src) in self.words.iter_mut().zip(&other.words) {
            *dst &= src;
        }
        // Words past the end of `other` intersect with implicit zeros.
        self.words[shared..].fill(0);
        self
    }

    /// Sets `self` to `self \ other`.
    ///
    /// Words that only `self` has are unaffected.
    pub fn difference_with(&mut self, other: &IntSet) -> &mut Self {
        for (dst, &src) in self.words.iter_mut().zip(&other.words) {
            *dst &= !src;
        }
        self
    }

    /// Sets `self` to the symmetric difference `self △ other`.
    ///
    /// Applying the same operand twice restores the original membership.
    pub fn symmetric_difference_with(&mut self, other: &IntSet) -> &mut Self {
        for (dst, &src) in self.words.iter_mut().zip(&other.words) {
            *dst ^= src;
        }
        if let Some(tail) = other.words.get(self.words.len()..) {
            self.words.extend_from_slice(tail);
        }
        self
    }

    /// Counts members.
    #[inline]
    pub fn len(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Returns `true` when no element is present, regardless of word count.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Collects the members in ascending order into a fresh vector.
    pub fn elems(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Iterates members in ascending order.
    #[inline]
    pub fn iter(&self) -> IntSetIter<'_> {
        IntSetIter {
            words: &self.words,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Smallest member, if any.
    pub fn min(&self) -> Option<usize> {
        self.words
            .iter()
            .position(|&word| word != 0)
            .map(|i| i * WORD_BITS + self.words[i].trailing_zeros() as usize)
    }

    /// Largest member, if any.
    pub fn max(&self) -> Option<usize> {
        let i = self.words.iter().rposition(|&word| word != 0)?;
        let bit_in_word = WORD_BITS - 1 - self.words[i].leading_zeros() as usize;
        Some(i * WORD_BITS + bit_in_word)
    }

    /// Returns `true` if every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &IntSet) -> bool {
        let shared = self.words.len().min(other.words.len());
        let shared_ok = self
            .words
            .iter()
            .zip(&other.words)
            .all(|(&a, &b)| a & !b == 0);
        shared_ok && self.words[shared..].iter().all(|&word| word == 0)
    }

    /// Returns `true` if `self` and `other` share no member.
    pub fn is_disjoint(&self, other: &IntSet) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(&a, &b)| a & b == 0)
    }

    /// Checked [`contains`](Self::contains) for signed input.
    ///
    /// # Errors
    /// Returns [`IntSetError::InvalidElement`] if `x` is negative.
    pub fn try_contains(&self, x: i64) -> Result<bool, IntSetError> {
        Ok(self.contains(checked_elem(x)?))
    }

    /// Checked [`insert`](Self::insert) for signed input.
    ///
    /// # Errors
    /// Returns [`IntSetError::InvalidElement`] if `x` is negative; the set is
    /// left unchanged.
    pub fn try_insert(&mut self, x: i64) -> Result<bool, IntSetError> {
        Ok(self.insert(checked_elem(x)?))
    }

    /// Checked [`remove`](Self::remove) for signed input.
    ///
    /// # Errors
    /// Returns [`IntSetError::InvalidElement`] if `x` is negative; the set is
    /// left unchanged.
    pub fn try_remove(&mut self, x: i64) -> Result<bool, IntSetError> {
        Ok(self.remove(checked_elem(x)?))
    }

    /// Checked [`insert_all`](Self::insert_all) for signed input.
    ///
    /// Every value is validated before any is inserted, so on error the set
    /// is unchanged.
    ///
    /// # Errors
    /// Returns [`IntSetError::InvalidElement`] for the first negative value.
    pub fn try_insert_all<I>(&mut self, xs: I) -> Result<(), IntSetError>
    where
        I: IntoIterator<Item = i64>,
    {
        let checked = xs
            .into_iter()
            .map(checked_elem)
            .collect::<Result<Vec<_>, _>>()?;
        self.insert_all(checked);
        Ok(())
    }
}

/// Iterator over members in ascending order, produced by [`IntSet::iter`].
///
/// Walks one word at a time, yielding the lowest set bit and clearing it.
#[derive(Clone)]
pub struct IntSetIter<'a> {
    words: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for IntSetIter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word.wrapping_sub(1);
                return Some(self.word_idx * WORD_BITS + bit_idx);
            }

            self.word_idx += 1;
            self.current_word = *self.words.get(self.word_idx)?;
        }
    }
}

impl FusedIterator for IntSetIter<'_> {}

impl<'a> IntoIterator for &'a IntSet {
    type Item = usize;
    type IntoIter = IntSetIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<usize> for IntSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = IntSet::new();
        set.insert_all(iter);
        set
    }
}

impl Extend<usize> for IntSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a> Extend<&'a usize> for IntSet {
    fn extend<I: IntoIterator<Item = &'a usize>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied());
    }
}

impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        self.live_words() == other.live_words()
    }
}

impl Eq for IntSet {}

impl Hash for IntSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.live_words().hash(state);
    }
}

/// Renders as `{1 9 144}`; the empty set renders as `{}`.
impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IntSet ")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

// In-place operators delegate to the named methods; the binary forms clone the
// left operand.
macro_rules! set_op {
    ($assign_trait:ident, $assign_fn:ident, $op_trait:ident, $op_fn:ident, $method:ident) => {
        impl $assign_trait<&IntSet> for IntSet {
            #[inline]
            fn $assign_fn(&mut self, rhs: &IntSet) {
                self.$method(rhs);
            }
        }

        impl $op_trait<&IntSet> for &IntSet {
            type Output = IntSet;

            #[inline]
            fn $op_fn(self, rhs: &IntSet) -> IntSet {
                let mut out = self.clone();
                out.$method(rhs);
                out
            }
        }
    };
}

set_op!(BitOrAssign, bitor_assign, BitOr, bitor, union_with);
set_op!(BitAndAssign, bitand_assign, BitAnd, bitand, intersect_with);
set_op!(SubAssign, sub_assign, Sub, sub, difference_with);
set_op!(BitXorAssign, bitxor_assign, BitXor, bitxor, symmetric_difference_with);

// ---------------------------------------------------------------------------
// Test module includes
// ---------------------------------------------------------------------------

#[cfg(any(all(test, feature = "stdx-proptest"), kani))]
#[path = "int_set_tests.rs"]
mod int_set_tests;
