//! # nlb-core — Foundational Types for Non-Local Box Wirings
//!
//! Defines the correlation boxes that wirings consume and produce, the
//! relabeling between their matrix and tensor forms, and the error types
//! shared by the whole workspace. `nlb-wiring` depends on this crate; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CorrelationBox` newtype.** The 4×4 matrix is private. Canonical
//!    constructors are valid by construction; anything else goes through
//!    `CorrelationBox::from_matrix()` which checks non-negativity and
//!    normalization.
//!
//! 2. **Validated parameters.** Box parameters outside {0, 1} and mixing
//!    weights outside [0, 1] are rejected, never silently reduced.
//!
//! 3. **Exact relabeling.** `matrix_to_tensor` / `tensor_to_matrix` are pure
//!    index permutations; round trips are bit-exact.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nlb-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod boxes;
pub mod bridge;
pub mod catalog;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use boxes::CorrelationBox;
pub use bridge::{flatten_tensor, matrix_to_tensor, tensor_to_matrix};
pub use error::{BoxError, NlbError, WiringError};
