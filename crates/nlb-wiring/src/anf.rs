//! # Algebraic Normal Form
//!
//! Every boolean function of `k` bits is a unique XOR of monomials over
//! GF(2). The coefficient of the monomial over a variable set `S` is the
//! Möbius (subset-sum) transform of the truth table:
//!
//! ```text
//! c_S = Σ_{T ⊆ S} (−1)^{|S| − |T|} · t[T]   (mod 2)
//! ```
//!
//! where `t[T]` is the table entry with exactly the bits of `T` set. Monomials
//! and table indices share one bit convention: the first listed argument is
//! the most significant bit.
//!
//! On a boolean table the signs are irrelevant mod 2. They are kept so a
//! relaxed table yields the same alternating sums as the finite-difference
//! formulas, which is what lenient decoding reports. Rounding residues
//! within [`RESIDUE_EPSILON`] of 0 or 2 reduce to 0, so a relaxed table
//! never reports a coefficient of 2 for a term that cancels.

use std::fmt;

use serde::Serialize;

use crate::layout::ProcessingFunction;

/// Residues this close to 0 or 2 after reduction count as 0.
pub const RESIDUE_EPSILON: f64 = 1e-12;

/// Reduce into `[0, 2)`, snapping rounding residues to 0.
fn reduce_mod_two(x: f64) -> f64 {
    let r = x.rem_euclid(2.0);
    if r <= RESIDUE_EPSILON || 2.0 - r <= RESIDUE_EPSILON {
        0.0
    } else {
        r
    }
}

/// Möbius transform of a table of length `2^k`, reduced into `[0, 2)`.
///
/// Entry `s` of the result is the coefficient of the monomial whose
/// variables are the set bits of `s`.
pub fn moebius_coefficients(entries: &[f64]) -> Vec<f64> {
    debug_assert!(entries.len().is_power_of_two());
    (0..entries.len())
        .map(|s| {
            let mut sum = 0.0;
            let mut t = s;
            loop {
                let sign = if (s ^ t).count_ones() % 2 == 0 { 1.0 } else { -1.0 };
                sum += sign * entries[t];
                if t == 0 {
                    break;
                }
                t = (t - 1) & s;
            }
            reduce_mod_two(sum)
        })
        .collect()
}

/// One XOR term: a coefficient times the product of the variables in `mask`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnfTerm {
    /// Variable set, table-index bit convention.
    pub mask: usize,
    /// Coefficient in `[0, 2)`; exactly 1 for a boolean function.
    pub coefficient: f64,
}

impl AnfTerm {
    /// Number of variables in the monomial.
    pub fn degree(&self) -> u32 {
        self.mask.count_ones()
    }
}

/// The algebraic normal form of one processing function.
///
/// Holds only nonzero terms, in presentation order: linear terms in argument
/// order, then products, the constant last.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnfExpression {
    function: ProcessingFunction,
    terms: Vec<AnfTerm>,
}

impl AnfExpression {
    /// Recover the ANF of a function from its table.
    pub fn from_table(function: ProcessingFunction, entries: &[f64]) -> Self {
        let mut terms: Vec<AnfTerm> = moebius_coefficients(entries)
            .into_iter()
            .enumerate()
            .filter(|&(_, coefficient)| coefficient != 0.0)
            .map(|(mask, coefficient)| AnfTerm { mask, coefficient })
            .collect();
        // Constant last; otherwise by degree, then argument order (the
        // higher mask holds the earlier argument).
        terms.sort_by_key(|term| (term.mask == 0, term.degree(), std::cmp::Reverse(term.mask)));
        Self { function, terms }
    }

    /// The function this expression describes.
    pub fn function(&self) -> ProcessingFunction {
        self.function
    }

    /// Nonzero terms in presentation order.
    pub fn terms(&self) -> &[AnfTerm] {
        &self.terms
    }

    /// Coefficient of the monomial over `mask` (0 when absent).
    pub fn coefficient(&self, mask: usize) -> f64 {
        self.terms
            .iter()
            .find(|term| term.mask == mask)
            .map_or(0.0, |term| term.coefficient)
    }

    /// True when every coefficient is exactly 1.
    pub fn is_boolean(&self) -> bool {
        self.terms.iter().all(|term| term.coefficient == 1.0)
    }

    /// Evaluate the polynomial at an argument tuple, mod 2.
    ///
    /// Returns `None` if `args` has the wrong length or a non-bit entry.
    pub fn evaluate(&self, args: &[u8]) -> Option<f64> {
        let point = crate::layout::pattern_index(args)?;
        if args.len() != self.function.arity() {
            return None;
        }
        let sum: f64 = self
            .terms
            .iter()
            .filter(|term| term.mask & point == term.mask)
            .map(|term| term.coefficient)
            .sum();
        Some(reduce_mod_two(sum))
    }

    fn monomial(&self, mask: usize) -> String {
        let arity = self.function.arity();
        self.function
            .arguments()
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask >> (arity - 1 - i) & 1 == 1)
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join("·")
    }
}

impl fmt::Display for AnfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ", self.function.signature())?;
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ⊕ ")?;
            }
            if term.mask == 0 {
                write!(f, "{}", term.coefficient)?;
            } else if term.coefficient == 1.0 {
                f.write_str(&self.monomial(term.mask))?;
            } else {
                write!(f, "{} {}", term.coefficient, self.monomial(term.mask))?;
            }
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
        /// Every 3-bit boolean table is recovered exactly from its ANF.
        #[test]
        fn anf_round_trips_three_bit_tables(bits in 0u8..=255) {
            let table: Vec<f64> = (0..8).map(|i| f64::from(bits >> i & 1)).collect();
            let e = AnfExpression::from_table(ProcessingFunction::F3, &table);
            prop_assert!(e.is_boolean());
            for (index, &value) in table.iter().enumerate() {
                prop_assert_eq!(e.evaluate(&pattern_args(3, index)), Some(value));
            }
        }

        /// The transform is an involution on boolean tables.
        #[test]
        fn moebius_is_involution(bits in 0u8..16) {
            let table: Vec<f64> = (0..4).map(|i| f64::from(bits >> i & 1)).collect();
            let twice = moebius_coefficients(&moebius_coefficients(&table));
            prop_assert_eq!(twice, table);
        }
    }
}
