//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move tree counts from known positions
//! - `make_unmake.rs` - Apply/undo correctness
//! - `movegen.rs` - Legal moves and flip masks
//! - `eval.rs` - Phase selection and table scoring
//! - `search.rs` - Engine behaviour and configuration
//! - `edge_cases.rs` - Passes, finished games and board edges
//! - `proptest.rs` - Property-based tests
//! - `serialization.rs` - JSON round trips (serde feature)

mod edge_cases;
mod make_unmake;
#[cfg(feature = "serde")]
mod serialization;
