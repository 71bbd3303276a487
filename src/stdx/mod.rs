//! Small, self-contained data structures.

pub mod int_set;

pub use int_set::{words_for_elem, IntSet, IntSetError, IntSetIter, WORD_BITS};
