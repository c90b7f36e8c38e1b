//! # Wiring Codec
//!
//! Encodes six processing-function tables into a wiring vector and decodes a
//! wiring vector back into six algebraic normal forms.
//!
//! ## Invariants
//!
//! - `decode_wiring(&encode_wiring(t)?.to_extremal())` re-evaluates to `t` on
//!   every argument tuple when `t` is boolean.
//! - Decoding never prints; [`DecodedWiring`] implements `Display` and the
//!   caller decides where the text goes.
//! - A relaxed wiring is only decoded through [`explain_relaxed`], which
//!   makes the boolean precondition explicit.

use std::fmt;

use serde::{Deserialize, Serialize};

use nlb_core::WiringError;

use crate::anf::AnfExpression;
use crate::layout::{pack, unpack, ProcessingFunction, WIRING_LEN};
use crate::table::WiringFunctions;
use crate::wiring::{ExtremalWiring, RelaxedWiring};

/// Pack six tables into a wiring vector.
///
/// # Errors
///
/// [`WiringError::InvalidTableLength`] or [`WiringError::NonFiniteEntry`]
/// if a table cannot fill its block. Tables built through
/// [`WiringFunctions`]' constructors always can.
pub fn encode_wiring(functions: &WiringFunctions) -> Result<RelaxedWiring, WiringError> {
    let mut entries = [0.0; WIRING_LEN];
    for table in functions.iter() {
        pack(&mut entries, table.function(), table.entries())?;
    }
    RelaxedWiring::new(entries)
}

/// Recover the algebraic normal form of each of the six functions.
pub fn decode_wiring(wiring: &ExtremalWiring) -> DecodedWiring {
    let entries = wiring.to_relaxed();
    DecodedWiring::from_entries(entries.entries())
}

/// How [`explain_relaxed`] treats entries that are not 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeMode {
    /// Reject the wiring.
    #[default]
    Strict,
    /// Decode anyway, logging a warning; fractional coefficients are
    /// printed literally and carry no boolean meaning.
    Lenient,
}

/// Options for decoding a relaxed wiring.
///
/// Deserialization goes through [`DecodeOptions::new`], so a loaded
/// configuration always has a usable tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDecodeOptions")]
pub struct DecodeOptions {
    /// Behaviour on non-boolean entries.
    pub mode: DecodeMode,
    /// Entries within this distance of 0 or 1 count as that bit. Must be
    /// finite and in `[0, 0.5)` so the two snapping windows stay disjoint.
    pub tolerance: f64,
}

/// Default tolerance for snapping entries to bits.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            mode: DecodeMode::Strict,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl DecodeOptions {
    /// Validated options.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError::InvalidTolerance`] unless `tolerance` is finite
    /// and in `[0, 0.5)`.
    pub fn new(mode: DecodeMode, tolerance: f64) -> Result<Self, WiringError> {
        let options = Self { mode, tolerance };
        options.validate()?;
        Ok(options)
    }

    /// Lenient decoding with the default tolerance.
    pub fn lenient() -> Self {
        Self {
            mode: DecodeMode::Lenient,
            ..Self::default()
        }
    }

    /// Check the tolerance; fields are public, so options built by hand
    /// are checked again before use.
    pub fn validate(&self) -> Result<(), WiringError> {
        if !(0.0..0.5).contains(&self.tolerance) {
            return Err(WiringError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Wire form of [`DecodeOptions`]; missing fields take their defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawDecodeOptions {
    mode: DecodeMode,
    tolerance: f64,
}

impl Default for RawDecodeOptions {
    fn default() -> Self {
        Self {
            mode: DecodeMode::Strict,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl TryFrom<RawDecodeOptions> for DecodeOptions {
    type Error = WiringError;

    fn try_from(raw: RawDecodeOptions) -> Result<Self, Self::Error> {
        Self::new(raw.mode, raw.tolerance)
    }
}

/// Decode a real-valued wiring.
///
/// Entries within `options.tolerance` of a bit are snapped to it. Any other
/// entry violates the decoder's precondition.
///
/// # Errors
///
/// - [`WiringError::InvalidTolerance`] if `options` fails
///   [`DecodeOptions::validate`].
/// - In [`DecodeMode::Strict`], [`WiringError::NonBooleanEntry`] for the
///   first entry that is not close to 0 or 1.
pub fn explain_relaxed(
    wiring: &RelaxedWiring,
    options: &DecodeOptions,
) -> Result<DecodedWiring, WiringError> {
    options.validate()?;
    let mut entries = *wiring.entries();
    let mut off_bit = 0usize;
    for (index, entry) in entries.iter_mut().enumerate() {
        if entry.abs() <= options.tolerance {
            *entry = 0.0;
        } else if (*entry - 1.0).abs() <= options.tolerance {
            *entry = 1.0;
        } else {
            match options.mode {
                DecodeMode::Strict => {
                    return Err(WiringError::NonBooleanEntry {
                        index,
                        value: *entry,
                    })
                }
                DecodeMode::Lenient => off_bit += 1,
            }
        }
    }
    if off_bit > 0 {
        tracing::warn!(
            entries = off_bit,
            "decoding a wiring with non-boolean entries; coefficients are not bits"
        );
    }
    Ok(DecodedWiring::from_entries(&entries))
}

/// The six recovered formulas, in vector order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedWiring {
    expressions: Vec<AnfExpression>,
}

impl DecodedWiring {
    fn from_entries(entries: &[f64; WIRING_LEN]) -> Self {
        let expressions = ProcessingFunction::all()
            .iter()
            .map(|&function| AnfExpression::from_table(function, unpack(entries, function)))
            .collect();
        Self { expressions }
    }

    /// Formula of one function.
    pub fn get(&self, function: ProcessingFunction) -> &AnfExpression {
        &self.expressions[function.rank()]
    }

    /// Formulas in vector order.
    pub fn iter(&self) -> impl Iterator<Item = &AnfExpression> {
        self.expressions.iter()
    }

    /// One rendered line per function.
    pub fn lines(&self) -> Vec<String> {
        self.expressions.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for DecodedWiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, expression) in self.expressions.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{expression}")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::layout::pattern_args;
    use proptest::prelude::*;

    proptest! {
        /// Any extremal wiring decodes to formulas that reproduce its bits.
        #[test]
        fn decode_reproduces_every_bit(bits in prop::array::uniform32(0u8..=1)) {
            let wiring = ExtremalWiring::from_bits(&bits).unwrap();
            let decoded = decode_wiring(&wiring);
            for &function in ProcessingFunction::all() {
                for index in 0..function.table_len() {
                    let args = pattern_args(function.arity(), index);
                    let expected = wiring.evaluate(function, &args).map(f64::from);
                    prop_assert_eq!(decoded.get(function).evaluate(&args), expected);
                }
            }
        }

        /// Encoding the decoded tables gives back the same vector.
        #[test]
        fn encode_inverts_table_split(bits in prop::array::uniform32(0u8..=1)) {
            let wiring = ExtremalWiring::from_bits(&bits).unwrap().to_relaxed();
            let functions = WiringFunctions::from_wiring(&wiring);
            prop_assert_eq!(encode_wiring(&functions).unwrap(), wiring);
        }
    }
}
