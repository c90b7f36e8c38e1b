//! # Wiring Vector Layout
//!
//! A wiring is six processing functions packed into one 32-entry vector.
//! This module is the single source of truth for where each function lives.
//!
//! | Function | Arguments | Arity | Offset | Length |
//! |----------|-----------|-------|--------|--------|
//! | `f_1` | `(x, a2)` | 2 | 0 | 4 |
//! | `g_1` | `(y, b2)` | 2 | 4 | 4 |
//! | `f_2` | `(x, a1)` | 2 | 8 | 4 |
//! | `g_2` | `(y, b1)` | 2 | 12 | 4 |
//! | `f_3` | `(x, a1, a2)` | 3 | 16 | 8 |
//! | `g_3` | `(y, b1, b2)` | 3 | 24 | 8 |
//!
//! Inside a block the entry for an argument tuple sits at the tuple read as
//! a binary number, first argument most significant: `f_3(x, a1, a2)` is at
//! `16 + 4x + 2a1 + a2`.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use nlb_core::WiringError;

/// Number of entries in a wiring vector.
pub const WIRING_LEN: usize = 32;

/// Number of processing functions in a wiring.
pub const PROCESSING_FUNCTION_COUNT: usize = 6;

/// One of the six local processing functions of a two-copy wiring.
///
/// `f_i` belong to Alice, `g_i` to Bob. `f_1`/`g_1` choose the input to the
/// first box from the local input and the second box's output, `f_2`/`g_2`
/// choose the input to the second box, and `f_3`/`g_3` compute the final
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingFunction {
    /// `f_1(x, a2)`.
    F1,
    /// `g_1(y, b2)`.
    G1,
    /// `f_2(x, a1)`.
    F2,
    /// `g_2(y, b1)`.
    G2,
    /// `f_3(x, a1, a2)`.
    F3,
    /// `g_3(y, b1, b2)`.
    G3,
}

impl ProcessingFunction {
    /// All six functions in vector order.
    pub fn all() -> &'static [ProcessingFunction; PROCESSING_FUNCTION_COUNT] {
        &[Self::F1, Self::G1, Self::F2, Self::G2, Self::F3, Self::G3]
    }

    /// Position in [`ProcessingFunction::all`].
    pub fn rank(self) -> usize {
        match self {
            Self::F1 => 0,
            Self::G1 => 1,
            Self::F2 => 2,
            Self::G2 => 3,
            Self::F3 => 4,
            Self::G3 => 5,
        }
    }

    /// Number of input bits.
    pub fn arity(self) -> usize {
        match self {
            Self::F1 | Self::G1 | Self::F2 | Self::G2 => 2,
            Self::F3 | Self::G3 => 3,
        }
    }

    /// Number of table entries, `2^arity`.
    pub fn table_len(self) -> usize {
        1 << self.arity()
    }

    /// Start of the function's block in the wiring vector.
    pub fn offset(self) -> usize {
        match self {
            Self::F1 => 0,
            Self::G1 => 4,
            Self::F2 => 8,
            Self::G2 => 12,
            Self::F3 => 16,
            Self::G3 => 24,
        }
    }

    /// Index range of the function's block in the wiring vector.
    pub fn block(self) -> Range<usize> {
        self.offset()..self.offset() + self.table_len()
    }

    /// Short name used in formulas (`f_1`, ..., `g_3`).
    pub fn name(self) -> &'static str {
        match self {
            Self::F1 => "f_1",
            Self::G1 => "g_1",
            Self::F2 => "f_2",
            Self::G2 => "g_2",
            Self::F3 => "f_3",
            Self::G3 => "g_3",
        }
    }

    /// Argument names, most significant first.
    pub fn arguments(self) -> &'static [&'static str] {
        match self {
            Self::F1 => &["x", "a2"],
            Self::G1 => &["y", "b2"],
            Self::F2 => &["x", "a1"],
            Self::G2 => &["y", "b1"],
            Self::F3 => &["x", "a1", "a2"],
            Self::G3 => &["y", "b1", "b2"],
        }
    }

    /// `f_3(x,a1,a2)` style signature.
    pub fn signature(self) -> String {
        format!("{}({})", self.name(), self.arguments().join(","))
    }
}

impl fmt::Display for ProcessingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Table index of an argument tuple (first argument most significant).
///
/// Returns `None` if an argument is not a bit.
pub fn pattern_index(args: &[u8]) -> Option<usize> {
    args.iter().try_fold(0usize, |acc, &bit| match bit {
        0 | 1 => Some(acc << 1 | usize::from(bit)),
        _ => None,
    })
}

/// Argument tuple of a table index, inverse of [`pattern_index`].
pub fn pattern_args(arity: usize, index: usize) -> Vec<u8> {
    (0..arity)
        .map(|i| ((index >> (arity - 1 - i)) & 1) as u8)
        .collect()
}

/// Write a function's table into its block of a wiring vector.
///
/// # Errors
///
/// Returns [`WiringError::InvalidTableLength`] if `entries` does not have
/// `2^arity` elements.
pub fn pack<T: Copy>(
    vector: &mut [T; WIRING_LEN],
    function: ProcessingFunction,
    entries: &[T],
) -> Result<(), WiringError> {
    if entries.len() != function.table_len() {
        return Err(WiringError::InvalidTableLength {
            function: function.name().to_string(),
            expected: function.table_len(),
            actual: entries.len(),
        });
    }
    vector[function.block()].copy_from_slice(entries);
    Ok(())
}

/// Read a function's table out of a wiring vector.
pub fn unpack<T>(vector: &[T; WIRING_LEN], function: ProcessingFunction) -> &[T] {
    &vector[function.block()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_tile_the_vector() {
        let mut next = 0;
        for &function in ProcessingFunction::all() {
            assert_eq!(function.offset(), next);
            assert_eq!(function.arguments().len(), function.arity());
            next = function.block().end;
        }
        assert_eq!(next, WIRING_LEN);
    }

    #[test]
    fn test_pattern_index_msb_first() {
        assert_eq!(pattern_index(&[1, 0]), Some(2));
        assert_eq!(pattern_index(&[0, 1]), Some(1));
        assert_eq!(pattern_index(&[1, 1, 0]), Some(6));
        assert_eq!(pattern_index(&[1, 2]), None);
        for index in 0..8 {
            assert_eq!(pattern_index(&pattern_args(3, index)), Some(index));
        }
    }

    #[test]
    fn test_pack_unpack() {
        let mut vector = [0u8; WIRING_LEN];
        pack(&mut vector, ProcessingFunction::F3, &[1u8, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(vector[16], 1);
        assert_eq!(vector[23], 8);
        assert_eq!(unpack(&vector, ProcessingFunction::F3), &[1u8, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(unpack(&vector, ProcessingFunction::G2), &[0u8; 4]);
    }

    #[test]
    fn test_pack_rejects_wrong_length() {
        let mut vector = [0.0; WIRING_LEN];
        let err = pack(&mut vector, ProcessingFunction::G1, &[1.0; 8]).unwrap_err();
        assert_eq!(
            err,
            WiringError::InvalidTableLength {
                function: "g_1".to_string(),
                expected: 4,
                actual: 8,
            }
        );
    }

    #[test]
    fn test_signature() {
        assert_eq!(ProcessingFunction::G3.signature(), "g_3(y,b1,b2)");
        assert_eq!(ProcessingFunction::F1.to_string(), "f_1");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ProcessingFunction::F3).unwrap();
        assert_eq!(json, "\"f3\"");
    }
}
