//! Integration tests for the public `IntSet` API.
//!
//! Run with: `cargo test --test integration`

mod checked_input;
