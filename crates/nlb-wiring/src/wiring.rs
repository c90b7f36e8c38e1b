//! # Relaxed and Extremal Wirings
//!
//! A wiring vector plays two roles. An optimizer treats its 32 entries as
//! real numbers in `[0, 1]` so it can follow gradients; the decoder treats
//! them as bits. The two roles are two types:
//!
//! - [`RelaxedWiring`]: 32 finite `f64`, no further constraint.
//! - [`ExtremalWiring`]: 32 bits, a genuine classical circuit.
//!
//! [`RelaxedWiring::to_extremal`] (round to nearest) and
//! [`ExtremalWiring::to_relaxed`] convert between them; both are total.
//!
//! The batched forms hold `n` wirings as the columns of a `32 × n` matrix,
//! the layout consumed by the external optimizer.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use nlb_core::WiringError;

use crate::codec::{decode_wiring, DecodedWiring};
use crate::layout::{pattern_index, unpack, ProcessingFunction, WIRING_LEN};

fn check_columns(n: usize) -> Result<usize, WiringError> {
    if n == 0 {
        return Err(WiringError::InvalidColumnCount(n));
    }
    Ok(n)
}

fn check_length(actual: usize) -> Result<(), WiringError> {
    if actual != WIRING_LEN {
        return Err(WiringError::InvalidLength {
            expected: WIRING_LEN,
            actual,
        });
    }
    Ok(())
}

/// Snap one relaxed entry to a bit: clamp to `[0, 1]`, round half to even.
fn snap(entry: f64) -> bool {
    entry.clamp(0.0, 1.0).round_ties_even() == 1.0
}

// ---------------------------------------------------------------------------
// Single wirings
// ---------------------------------------------------------------------------

/// A real-valued wiring vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct RelaxedWiring([f64; WIRING_LEN]);

impl RelaxedWiring {
    /// Wrap 32 entries.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError::NonFiniteEntry`] for NaN or infinite entries.
    pub fn new(entries: [f64; WIRING_LEN]) -> Result<Self, WiringError> {
        if let Some((index, &value)) = entries.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(WiringError::NonFiniteEntry { index, value });
        }
        Ok(Self(entries))
    }

    /// Wrap a slice that must hold exactly 32 finite entries.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError::InvalidLength`] for any other length, or
    /// [`WiringError::NonFiniteEntry`].
    pub fn from_slice(entries: &[f64]) -> Result<Self, WiringError> {
        check_length(entries.len())?;
        let mut array = [0.0; WIRING_LEN];
        array.copy_from_slice(entries);
        Self::new(array)
    }

    /// Literal catalog data, known finite.
    pub(crate) const fn from_literal(entries: [f64; WIRING_LEN]) -> Self {
        Self(entries)
    }

    /// All 32 entries.
    pub fn entries(&self) -> &[f64; WIRING_LEN] {
        &self.0
    }

    /// Entries of one function's block.
    pub fn block(&self, function: ProcessingFunction) -> &[f64] {
        unpack(&self.0, function)
    }

    /// True when every entry is exactly 0 or 1.
    pub fn is_extremal(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0 || v == 1.0)
    }

    /// Nearest classical wiring.
    ///
    /// Entries are clamped to `[0, 1]` and rounded half to even, so `0.5`
    /// snaps to 0. On an already extremal wiring this is the identity.
    pub fn to_extremal(&self) -> ExtremalWiring {
        ExtremalWiring(self.0.map(snap))
    }

    /// `n` copies of this wiring as the columns of a trainable batch.
    pub fn replicate(&self, n: usize) -> Result<RelaxedWiringBatch, WiringError> {
        let n = check_columns(n)?;
        let columns = Array2::from_shape_fn((WIRING_LEN, n), |(i, _)| self.0[i]);
        Ok(RelaxedWiringBatch {
            columns,
            requires_grad: true,
        })
    }
}

impl TryFrom<Vec<f64>> for RelaxedWiring {
    type Error = WiringError;

    fn try_from(entries: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&entries)
    }
}

impl From<RelaxedWiring> for Vec<f64> {
    fn from(w: RelaxedWiring) -> Self {
        w.0.to_vec()
    }
}

/// A classical wiring: every entry is a bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct ExtremalWiring([bool; WIRING_LEN]);

impl ExtremalWiring {
    /// Wrap 32 bits.
    pub fn new(bits: [bool; WIRING_LEN]) -> Self {
        Self(bits)
    }

    /// Wrap a slice of exactly 32 values in {0, 1}.
    ///
    /// # Errors
    ///
    /// [`WiringError::InvalidLength`] for any other length,
    /// [`WiringError::NonBooleanEntry`] for a value above 1.
    pub fn from_bits(bits: &[u8]) -> Result<Self, WiringError> {
        check_length(bits.len())?;
        let mut array = [false; WIRING_LEN];
        for (index, (slot, &bit)) in array.iter_mut().zip(bits).enumerate() {
            *slot = match bit {
                0 => false,
                1 => true,
                _ => {
                    return Err(WiringError::NonBooleanEntry {
                        index,
                        value: f64::from(bit),
                    })
                }
            };
        }
        Ok(Self(array))
    }

    /// Entries as 0/1.
    pub fn bits(&self) -> [u8; WIRING_LEN] {
        self.0.map(u8::from)
    }

    /// Same wiring as a relaxed vector of 0.0/1.0.
    pub fn to_relaxed(&self) -> RelaxedWiring {
        RelaxedWiring(self.0.map(|b| if b { 1.0 } else { 0.0 }))
    }

    /// Value of `function` at an argument tuple.
    ///
    /// `None` if `args` has the wrong length or a non-bit component.
    pub fn evaluate(&self, function: ProcessingFunction, args: &[u8]) -> Option<bool> {
        if args.len() != function.arity() {
            return None;
        }
        pattern_index(args).map(|index| unpack(&self.0, function)[index])
    }

    /// Algebraic normal forms of the six functions.
    pub fn decode(&self) -> DecodedWiring {
        decode_wiring(self)
    }

    /// `n` copies of this wiring as the columns of a batch.
    pub fn replicate(&self, n: usize) -> Result<ExtremalWiringBatch, WiringError> {
        let n = check_columns(n)?;
        let bits = self.bits();
        Ok(ExtremalWiringBatch {
            columns: Array2::from_shape_fn((WIRING_LEN, n), |(i, _)| bits[i]),
        })
    }
}

impl TryFrom<Vec<u8>> for ExtremalWiring {
    type Error = WiringError;

    fn try_from(bits: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bits(&bits)
    }
}

impl From<ExtremalWiring> for Vec<u8> {
    fn from(w: ExtremalWiring) -> Self {
        w.bits().to_vec()
    }
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

/// `n` relaxed wirings as the columns of a `32 × n` matrix.
///
/// `requires_grad` marks the batch as a parameter the external optimizer
/// should differentiate; constructors that build search starting points set
/// it, [`RelaxedWiringBatch::detach`] clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaxedWiringBatch {
    columns: Array2<f64>,
    requires_grad: bool,
}

impl RelaxedWiringBatch {
    /// Wrap a `32 × n` matrix, `n ≥ 1`, all entries finite.
    pub fn from_array(columns: Array2<f64>, requires_grad: bool) -> Result<Self, WiringError> {
        check_length(columns.nrows())?;
        check_columns(columns.ncols())?;
        if let Some(((index, _), &value)) = columns.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(WiringError::NonFiniteEntry { index, value });
        }
        Ok(Self {
            columns,
            requires_grad,
        })
    }

    /// Number of wirings in the batch.
    pub fn len(&self) -> usize {
        self.columns.ncols()
    }

    /// Always false: batches have at least one column.
    pub fn is_empty(&self) -> bool {
        self.columns.ncols() == 0
    }

    /// Whether the optimizer should treat the batch as a parameter.
    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    /// Same values, no longer marked as a parameter.
    pub fn detach(self) -> Self {
        Self {
            requires_grad: false,
            ..self
        }
    }

    /// The `32 × n` matrix.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.columns
    }

    /// Take the `32 × n` matrix.
    pub fn into_array(self) -> Array2<f64> {
        self.columns
    }

    /// Wiring in column `index`.
    pub fn column(&self, index: usize) -> Result<RelaxedWiring, WiringError> {
        if index >= self.len() {
            return Err(WiringError::ColumnOutOfRange {
                index,
                columns: self.len(),
            });
        }
        let mut entries = [0.0; WIRING_LEN];
        for (slot, &value) in entries.iter_mut().zip(self.columns.column(index)) {
            *slot = value;
        }
        Ok(RelaxedWiring(entries))
    }

    /// Round every column, see [`RelaxedWiring::to_extremal`].
    pub fn to_extremal(&self) -> ExtremalWiringBatch {
        ExtremalWiringBatch {
            columns: self.columns.mapv(|v| u8::from(snap(v))),
        }
    }
}

/// `n` classical wirings as the columns of a `32 × n` bit matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtremalWiringBatch {
    columns: Array2<u8>,
}

impl ExtremalWiringBatch {
    /// Wrap a `32 × n` matrix of 0/1, `n ≥ 1`.
    pub fn from_array(columns: Array2<u8>) -> Result<Self, WiringError> {
        check_length(columns.nrows())?;
        check_columns(columns.ncols())?;
        if let Some(((index, _), &value)) = columns.indexed_iter().find(|(_, v)| **v > 1) {
            return Err(WiringError::NonBooleanEntry {
                index,
                value: f64::from(value),
            });
        }
        Ok(Self { columns })
    }

    /// Number of wirings in the batch.
    pub fn len(&self) -> usize {
        self.columns.ncols()
    }

    /// Always false: batches have at least one column.
    pub fn is_empty(&self) -> bool {
        self.columns.ncols() == 0
    }

    /// The `32 × n` matrix.
    pub fn as_array(&self) -> &Array2<u8> {
        &self.columns
    }

    /// Wiring in column `index`.
    pub fn column(&self, index: usize) -> Result<ExtremalWiring, WiringError> {
        if index >= self.len() {
            return Err(WiringError::ColumnOutOfRange {
                index,
                columns: self.len(),
            });
        }
        let mut bits = [false; WIRING_LEN];
        for (slot, &value) in bits.iter_mut().zip(self.columns.column(index)) {
            *slot = value == 1;
        }
        Ok(ExtremalWiring(bits))
    }

    /// As 0.0/1.0 reals. Not a parameter: classical wirings are not
    /// differentiated.
    pub fn to_relaxed(&self) -> RelaxedWiringBatch {
        RelaxedWiringBatch {
            columns: self.columns.mapv(f64::from),
            requires_grad: false,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rounding twice equals rounding once.
        #[test]
        fn rounding_is_idempotent(entries in prop::array::uniform32(0.0f64..=1.0)) {
            let once = RelaxedWiring::new(entries).unwrap().to_extremal();
            prop_assert_eq!(once.to_relaxed().to_extremal(), once);
        }
    }
}
