//! # Named Wiring Families
//!
//! Wirings from the non-locality distillation literature, used as starting
//! points and reference values for the external search.
//!
//! Every family but `W9` shares `f_1 = x`, `g_1 = y`. They differ in the
//! second-box inputs and the output combiners:
//!
//! | Family | `f_2` | `g_2` | `f_3` | `g_3` |
//! |--------|-------|-------|-------|-------|
//! | FWW09 | `x` | `y` | `a1 ⊕ a2` | `b1 ⊕ b2` |
//! | BS09 | `x·a1` | `y·b1` | `a1 ⊕ a2` | `b1 ⊕ b2` |
//! | ABLPSV09a | `x ⊕ a1 ⊕ 1` | `y·b1` | `a1 ⊕ a2 ⊕ 1` | `b1 ⊕ b2 ⊕ 1` |
//! | ABLPSV09b | `x` | `y` | `a1·a2` | `b1·b2` |
//! | NSSRRB22 | `x` | `y` | `max(a1, a2)` | `min(b1, b2)` |
//! | Pierre1 | `x` | `y` | `a1·a2 ⊕ 1` | `b1·b2 ⊕ 1` |
//!
//! `W9` is a fixed vector found by numerical search.

use std::fmt;

use serde::{Deserialize, Serialize};

use nlb_core::WiringError;

use crate::codec::encode_wiring;
use crate::table::WiringFunctions;
use crate::wiring::{RelaxedWiring, RelaxedWiringBatch};

const W9: [f64; 32] = [
    0., 1., 1., 0., 0., 0., 1., 0., 0., 0., 1., 1., 0., 0., 1., 1., //
    1., 0., 0., 1., 1., 0., 0., 1., 1., 0., 0., 1., 1., 0., 0., 1.,
];

/// A literature wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WiringFamily {
    /// Forster, Winkler, Wolf (2009): XOR of two boxes.
    #[serde(rename = "FWW09")]
    Fww09,
    /// Brunner, Skrzypczyk (2009).
    #[serde(rename = "BS09")]
    Bs09,
    /// Fixed wiring found by numerical search.
    #[serde(rename = "W9")]
    W9,
    /// Allcock, Brunner, Linden, Popescu, Skrzypczyk, Vértesi (2009), first
    /// protocol.
    #[serde(rename = "ABLPSV09a")]
    Ablpsv09a,
    /// Same authors, AND of the outputs.
    #[serde(rename = "ABLPSV09b")]
    Ablpsv09b,
    /// NSSRRB (2022): OR for Alice, AND for Bob.
    #[serde(rename = "NSSRRB22")]
    Nssrrb22,
    /// NAND of the outputs.
    #[serde(rename = "Pierre1")]
    Pierre1,
}

impl WiringFamily {
    /// Every family.
    pub fn all() -> &'static [WiringFamily] {
        &[
            Self::Fww09,
            Self::Bs09,
            Self::W9,
            Self::Ablpsv09a,
            Self::Ablpsv09b,
            Self::Nssrrb22,
            Self::Pierre1,
        ]
    }

    /// Citation-style label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fww09 => "FWW09",
            Self::Bs09 => "BS09",
            Self::W9 => "W9",
            Self::Ablpsv09a => "ABLPSV09a",
            Self::Ablpsv09b => "ABLPSV09b",
            Self::Nssrrb22 => "NSSRRB22",
            Self::Pierre1 => "Pierre1",
        }
    }

    /// The six tables of the family.
    pub fn functions(self) -> WiringFunctions {
        let first = |x: u8, _: u8| x;
        match self {
            Self::Fww09 => {
                WiringFunctions::from_rules(first, first, first, first, xor_outputs, xor_outputs)
            }
            Self::Bs09 => WiringFunctions::from_rules(
                first,
                first,
                |x, a1| x & a1,
                |y, b1| y & b1,
                xor_outputs,
                xor_outputs,
            ),
            Self::W9 => {
                // Literal vector, always finite.
                WiringFunctions::from_wiring(&RelaxedWiring::from_literal(W9))
            }
            Self::Ablpsv09a => {
                let xnor_outputs = |_: u8, a1: u8, a2: u8| a1 ^ a2 ^ 1;
                WiringFunctions::from_rules(
                    first,
                    first,
                    |x, a1| x ^ a1 ^ 1,
                    |y, b1| y & b1,
                    xnor_outputs,
                    xnor_outputs,
                )
            }
            Self::Ablpsv09b => {
                let and_outputs = |_: u8, a1: u8, a2: u8| a1 & a2;
                WiringFunctions::from_rules(first, first, first, first, and_outputs, and_outputs)
            }
            Self::Nssrrb22 => WiringFunctions::from_rules(
                first,
                first,
                first,
                first,
                |_, a1, a2| a1.max(a2),
                |_, b1, b2| b1.min(b2),
            ),
            Self::Pierre1 => {
                let nand_outputs = |_: u8, a1: u8, a2: u8| (a1 & a2) ^ 1;
                WiringFunctions::from_rules(first, first, first, first, nand_outputs, nand_outputs)
            }
        }
    }

    /// The family's wiring vector.
    ///
    /// # Errors
    ///
    /// Propagates [`encode_wiring`] errors; the family tables are boolean,
    /// so none occur in practice.
    pub fn wiring(self) -> Result<RelaxedWiring, WiringError> {
        match self {
            Self::W9 => RelaxedWiring::new(W9),
            _ => encode_wiring(&self.functions()),
        }
    }

    /// `n` copies as a trainable batch.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError::InvalidColumnCount`] when `n` is zero.
    pub fn batch(self, n: usize) -> Result<RelaxedWiringBatch, WiringError> {
        let batch = self.wiring()?.replicate(n)?;
        tracing::debug!(family = self.label(), columns = n, "built wiring family batch");
        Ok(batch)
    }
}

impl fmt::Display for WiringFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn xor_outputs(_: u8, a1: u8, a2: u8) -> u8 {
    a1 ^ a2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ProcessingFunction::{self, *};

    fn bits(family: WiringFamily) -> [u8; 32] {
        family.wiring().unwrap().to_extremal().bits()
    }

    #[test]
    fn test_bs09_vector() {
        assert_eq!(
            bits(WiringFamily::Bs09),
            [
                0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, //
                0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0,
            ]
        );
    }

    #[test]
    fn test_fww09_second_inputs_copy_x() {
        let w = WiringFamily::Fww09.wiring().unwrap();
        assert_eq!(w.block(F2), &[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(w.block(G2), &[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(w.block(F3), WiringFamily::Bs09.wiring().unwrap().block(F3));
    }

    #[test]
    fn test_family_formulas() {
        let formula = |family: WiringFamily, function: ProcessingFunction| {
            family.wiring().unwrap().to_extremal().decode().get(function).to_string()
        };
        assert_eq!(formula(WiringFamily::Bs09, F2), "f_2(x,a1) = x·a1");
        assert_eq!(formula(WiringFamily::Ablpsv09a, F2), "f_2(x,a1) = x ⊕ a1 ⊕ 1");
        assert_eq!(formula(WiringFamily::Ablpsv09a, G3), "g_3(y,b1,b2) = b1 ⊕ b2 ⊕ 1");
        assert_eq!(formula(WiringFamily::Ablpsv09b, F3), "f_3(x,a1,a2) = a1·a2");
        assert_eq!(formula(WiringFamily::Nssrrb22, F3), "f_3(x,a1,a2) = a1 ⊕ a2 ⊕ a1·a2");
        assert_eq!(formula(WiringFamily::Nssrrb22, G3), "g_3(y,b1,b2) = b1·b2");
        assert_eq!(formula(WiringFamily::Pierre1, G3), "g_3(y,b1,b2) = b1·b2 ⊕ 1");
    }

    #[test]
    fn test_w9_literal() {
        let w = WiringFamily::W9.wiring().unwrap();
        assert_eq!(w.entries(), &W9);
        assert_eq!(encode_wiring(&WiringFamily::W9.functions()).unwrap(), w);
        assert_eq!(w.block(F1), &[0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_all_families_extremal_and_distinct() {
        let all = WiringFamily::all();
        for (i, a) in all.iter().enumerate() {
            assert!(a.wiring().unwrap().is_extremal(), "{a}");
            for b in &all[i + 1..] {
                assert_ne!(a.wiring().unwrap(), b.wiring().unwrap(), "{a} == {b}");
            }
        }
    }

    #[test]
    fn test_batch() {
        let batch = WiringFamily::Pierre1.batch(4).unwrap();
        assert_eq!(batch.as_array().shape(), &[32, 4]);
        assert!(batch.requires_grad());
        assert_eq!(batch.column(2).unwrap(), WiringFamily::Pierre1.wiring().unwrap());
        assert_eq!(
            WiringFamily::Fww09.batch(0).unwrap_err(),
            WiringError::InvalidColumnCount(0)
        );
    }

    #[test]
    fn test_serde_labels() {
        for &family in WiringFamily::all() {
            let json = serde_json::to_string(&family).unwrap();
            assert_eq!(json, format!("\"{}\"", family.label()));
            let back: WiringFamily = serde_json::from_str(&json).unwrap();
            assert_eq!(back, family);
        }
    }
}
