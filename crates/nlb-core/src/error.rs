//! # Error Types — Input-Domain Validation
//!
//! Defines the error types used throughout the workspace. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every constructor validates its parameter domain and fails with the
//!   offending value in the error.
//! - Box errors and wiring errors are separate enums; `NlbError` unifies
//!   them for callers that handle both.

use thiserror::Error;

/// Top-level error type for the workspace.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NlbError {
    /// A box constructor or conversion rejected its input.
    #[error("box error: {0}")]
    Box(#[from] BoxError),

    /// A wiring constructor, codec or decoder rejected its input.
    #[error("wiring error: {0}")]
    Wiring(#[from] WiringError),
}

/// Error while building or converting a correlation box.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoxError {
    /// A deterministic/extremal box parameter was not 0 or 1.
    #[error("parameter {name} must be 0 or 1, got {value}")]
    InvalidBit {
        /// Parameter name (`mu`, `nu`, `sigma`, `tau`, `a`, ...).
        name: &'static str,
        /// The rejected value.
        value: u8,
    },

    /// A mixing probability was outside `[0, 1]` or NaN.
    #[error("probability must lie in [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),

    /// An array did not have the expected shape.
    #[error("expected shape {expected:?}, got {actual:?}")]
    InvalidShape {
        /// Required shape.
        expected: Vec<usize>,
        /// Shape that was supplied.
        actual: Vec<usize>,
    },

    /// A matrix entry was negative or not finite.
    #[error("entry [{row}, {col}] = {value} is not a probability")]
    InvalidEntry {
        /// Row index `2x + y`.
        row: usize,
        /// Column index `2a + b`.
        col: usize,
        /// The rejected value.
        value: f64,
    },

    /// A row did not sum to one.
    #[error("row {row} sums to {sum}, expected 1")]
    NotNormalized {
        /// Row index `2x + y`.
        row: usize,
        /// Actual row sum.
        sum: f64,
    },
}

/// Error in wiring vectors, function tables or their decoding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WiringError {
    /// A wiring vector did not have exactly 32 entries.
    #[error("wiring vector must have {expected} entries, got {actual}")]
    InvalidLength {
        /// Always 32.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// A truth table length did not match `2^arity`.
    #[error("truth table for {function} must have {expected} entries, got {actual}")]
    InvalidTableLength {
        /// Function name (`f_1`, `g_3`, ...).
        function: String,
        /// `2^arity`.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// A batched constructor was asked for zero columns.
    #[error("column count must be positive, got {0}")]
    InvalidColumnCount(usize),

    /// A wiring entry was NaN or infinite.
    #[error("wiring entry {index} is not finite: {value}")]
    NonFiniteEntry {
        /// Position in the 32-entry vector.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// Strict decoding met an entry that is not 0 or 1.
    #[error("wiring entry {index} = {value} is not boolean; round the wiring before decoding")]
    NonBooleanEntry {
        /// Position in the 32-entry vector.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// A set of tables did not name a function.
    #[error("no truth table given for {function}")]
    MissingTable {
        /// Function name (`f_1`, `g_3`, ...).
        function: String,
    },

    /// A set of tables named a function twice.
    #[error("truth table for {function} given more than once")]
    DuplicateTable {
        /// Function name (`f_1`, `g_3`, ...).
        function: String,
    },

    /// A decode tolerance was not finite or not in `[0, 0.5)`.
    #[error("decode tolerance must lie in [0, 0.5), got {0}")]
    InvalidTolerance(f64),

    /// A column index was out of range for a batch.
    #[error("column {index} out of range for a batch of {columns} columns")]
    ColumnOutOfRange {
        /// Requested column.
        index: usize,
        /// Number of columns in the batch.
        columns: usize,
    },
}
