//! # Correlation Boxes
//!
//! A box is a bipartite conditional probability table `P(a, b | x, y)` with
//! binary inputs `x, y` and binary outputs `a, b`, stored as the 4×4 matrix
//! `P[2x + y, 2a + b]`.
//!
//! ## Invariants
//!
//! - Every entry is finite and non-negative.
//! - Every row sums to 1 (a distribution over `(a, b)` for fixed `(x, y)`).
//!
//! `CorrelationBox` keeps its matrix private; the canonical constructors
//! below produce valid boxes by construction and [`CorrelationBox::from_matrix`]
//! validates anything else.
//!
//! ## Canonical families
//!
//! | Constructor | Rule | Count |
//! |-------------|------|-------|
//! | `local(μ, ν, σ, τ)` | `a = μx ⊕ ν`, `b = σy ⊕ τ` | 16 |
//! | `nonlocal_extremal(μ, ν, σ)` | `a ⊕ b = xy ⊕ μx ⊕ νy ⊕ σ`, weight ½ | 8 |
//! | `chsh` | `a ⊕ b = xy`, weight ¼ | 1 |
//! | `chsh_prime` | `a ⊕ b = (1 − x)(1 − y)`, weight ¼ | 1 |

use ndarray::{Array2, Array4};
use serde::{Deserialize, Serialize};

use crate::error::BoxError;

/// Row-sum tolerance used by [`CorrelationBox::from_matrix`].
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

fn check_bit(name: &'static str, value: u8) -> Result<u8, BoxError> {
    if value > 1 {
        return Err(BoxError::InvalidBit { name, value });
    }
    Ok(value)
}

fn check_probability(p: f64) -> Result<f64, BoxError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(BoxError::ProbabilityOutOfRange(p));
    }
    Ok(p)
}

/// A validated two-party, two-input, two-output correlation box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<f64>", into = "Array2<f64>")]
pub struct CorrelationBox(Array2<f64>);

impl CorrelationBox {
    /// Put `weight` on every `(a, b, x, y)` accepted by `rule`, zero elsewhere.
    fn from_rule(weight: f64, rule: impl Fn(u8, u8, u8, u8) -> bool) -> Self {
        let mut matrix = Array2::zeros((4, 4));
        for a in 0..2u8 {
            for b in 0..2u8 {
                for x in 0..2u8 {
                    for y in 0..2u8 {
                        if rule(a, b, x, y) {
                            matrix[[usize::from(2 * x + y), usize::from(2 * a + b)]] = weight;
                        }
                    }
                }
            }
        }
        Self(matrix)
    }

    fn extremal(mu: u8, nu: u8, sigma: u8) -> Self {
        Self::from_rule(0.5, |a, b, x, y| {
            (a + b) % 2 == (x * y + mu * x + nu * y + sigma) % 2
        })
    }

    fn deterministic(mu: u8, nu: u8, sigma: u8, tau: u8) -> Self {
        Self::from_rule(1.0, |a, b, x, y| {
            a == (mu * x + nu) % 2 && b == (sigma * y + tau) % 2
        })
    }

    /// Validate an arbitrary 4×4 matrix as a box.
    ///
    /// # Errors
    ///
    /// - [`BoxError::InvalidShape`] if the matrix is not 4×4.
    /// - [`BoxError::InvalidEntry`] for a negative or non-finite entry.
    /// - [`BoxError::NotNormalized`] if a row sum differs from 1 by more than
    ///   [`NORMALIZATION_TOLERANCE`].
    pub fn from_matrix(matrix: Array2<f64>) -> Result<Self, BoxError> {
        if matrix.shape() != [4, 4] {
            return Err(BoxError::InvalidShape {
                expected: vec![4, 4],
                actual: matrix.shape().to_vec(),
            });
        }
        for ((row, col), &value) in matrix.indexed_iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(BoxError::InvalidEntry { row, col, value });
            }
        }
        for (row, line) in matrix.rows().into_iter().enumerate() {
            let sum = line.sum();
            if (sum - 1.0).abs() > NORMALIZATION_TOLERANCE {
                return Err(BoxError::NotNormalized { row, sum });
            }
        }
        Ok(Self(matrix))
    }

    /// Deterministic local box `a = μx ⊕ ν`, `b = σy ⊕ τ`.
    ///
    /// A vertex of the local polytope: exactly one entry per row is 1.
    pub fn local(mu: u8, nu: u8, sigma: u8, tau: u8) -> Result<Self, BoxError> {
        Ok(Self::deterministic(
            check_bit("mu", mu)?,
            check_bit("nu", nu)?,
            check_bit("sigma", sigma)?,
            check_bit("tau", tau)?,
        ))
    }

    /// Extremal non-local (generalized PR) box with
    /// `a ⊕ b = xy ⊕ μx ⊕ νy ⊕ σ`; both admissible outcomes get ½.
    pub fn nonlocal_extremal(mu: u8, nu: u8, sigma: u8) -> Result<Self, BoxError> {
        Ok(Self::extremal(
            check_bit("mu", mu)?,
            check_bit("nu", nu)?,
            check_bit("sigma", sigma)?,
        ))
    }

    /// All 16 deterministic local boxes, `(μ, ν, σ, τ)` in binary counting order.
    pub fn all_local() -> Vec<Self> {
        (0..16u8)
            .map(|n| Self::deterministic(n >> 3 & 1, n >> 2 & 1, n >> 1 & 1, n & 1))
            .collect()
    }

    /// All 8 extremal non-local boxes, `(μ, ν, σ)` in binary counting order.
    pub fn all_nonlocal_extremal() -> Vec<Self> {
        (0..8u8)
            .map(|n| Self::extremal(n >> 2 & 1, n >> 1 & 1, n & 1))
            .collect()
    }

    /// The Popescu–Rohrlich box, `a ⊕ b = xy`.
    pub fn pr() -> Self {
        Self::extremal(0, 0, 0)
    }

    /// `a ⊕ b = xy ⊕ 1`.
    pub fn pr_bar() -> Self {
        Self::extremal(0, 0, 1)
    }

    /// `a ⊕ b = xy ⊕ x ⊕ y ⊕ 1`.
    pub fn pr_prime() -> Self {
        Self::extremal(1, 1, 1)
    }

    /// Both parties always output 0.
    pub fn local_zero() -> Self {
        Self::deterministic(0, 0, 0, 0)
    }

    /// Both parties always output 1.
    pub fn local_one() -> Self {
        Self::deterministic(0, 1, 0, 1)
    }

    /// Equal mixture of [`local_zero`](Self::local_zero) and
    /// [`local_one`](Self::local_one): perfectly correlated random bits.
    pub fn shared_randomness() -> Self {
        Self((Self::local_zero().0 + Self::local_one().0) / 2.0)
    }

    /// The maximally mixed box, ¼ everywhere.
    pub fn uniform() -> Self {
        Self(Array2::from_elem((4, 4), 0.25))
    }

    /// Perfectly anti-correlated random bits, `2·uniform − shared_randomness`.
    pub fn shared_randomness_complement() -> Self {
        Self(Self::uniform().0 * 2.0 - Self::shared_randomness().0)
    }

    /// Depolarized PR box `p·PR + (1 − p)·SR`.
    pub fn noisy_pr(p: f64) -> Result<Self, BoxError> {
        Self::pr().mix(&Self::shared_randomness(), p)
    }

    /// CHSH game indicator: ¼ wherever `a ⊕ b = xy`.
    ///
    /// Not a box (rows sum to ½); its inner product with a box is the
    /// box's CHSH winning probability.
    pub fn chsh() -> Array2<f64> {
        Self::from_rule(0.25, |a, b, x, y| (a + b) % 2 == x * y).0
    }

    /// CHSH indicator with complemented inputs: ¼ wherever
    /// `a ⊕ b = (1 − x)(1 − y)`.
    pub fn chsh_prime() -> Array2<f64> {
        Self::from_rule(0.25, |a, b, x, y| (a + b) % 2 == (1 - x) * (1 - y)).0
    }

    /// Convex combination `weight·self + (1 − weight)·other`.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::ProbabilityOutOfRange`] unless `weight ∈ [0, 1]`.
    pub fn mix(&self, other: &Self, weight: f64) -> Result<Self, BoxError> {
        let w = check_probability(weight)?;
        Ok(Self(&self.0 * w + &other.0 * (1.0 - w)))
    }

    /// `P(a, b | x, y)`.
    pub fn probability(&self, a: u8, b: u8, x: u8, y: u8) -> Result<f64, BoxError> {
        let (a, b) = (check_bit("a", a)?, check_bit("b", b)?);
        let (x, y) = (check_bit("x", x)?, check_bit("y", y)?);
        Ok(self.0[[usize::from(2 * x + y), usize::from(2 * a + b)]])
    }

    /// Sum of each row; all 1 up to rounding.
    pub fn row_sums(&self) -> [f64; 4] {
        let mut sums = [0.0; 4];
        for (sum, row) in sums.iter_mut().zip(self.0.rows()) {
            *sum = row.sum();
        }
        sums
    }

    /// Check that Alice's marginal does not depend on `y` and Bob's does
    /// not depend on `x`, up to `tolerance`.
    pub fn is_no_signaling(&self, tolerance: f64) -> bool {
        let m = &self.0;
        let alice = |x: usize, y: usize, a: usize| m[[2 * x + y, 2 * a]] + m[[2 * x + y, 2 * a + 1]];
        let bob = |x: usize, y: usize, b: usize| m[[2 * x + y, b]] + m[[2 * x + y, 2 + b]];
        (0..2).all(|i| {
            (0..2).all(|out| {
                (alice(i, 0, out) - alice(i, 1, out)).abs() <= tolerance
                    && (bob(0, i, out) - bob(1, i, out)).abs() <= tolerance
            })
        })
    }

    /// The box as the tensor `T[a, b, x, y] = P[2x + y, 2a + b]`.
    ///
    /// Same relabeling as [`crate::bridge::matrix_to_tensor`], which cannot
    /// fail for a box.
    pub fn to_tensor(&self) -> Array4<f64> {
        Array4::from_shape_fn((2, 2, 2, 2), |(a, b, x, y)| self.0[[2 * x + y, 2 * a + b]])
    }

    /// CHSH winning probability: `Σ chsh ⊙ P`.
    pub fn chsh_score(&self) -> f64 {
        (&self.0 * &Self::chsh()).sum()
    }

    /// Winning probability for the complemented-input CHSH game.
    pub fn chsh_prime_score(&self) -> f64 {
        (&self.0 * &Self::chsh_prime()).sum()
    }

    /// Borrow the 4×4 matrix.
    pub fn as_matrix(&self) -> &Array2<f64> {
        &self.0
    }

    /// Take the 4×4 matrix.
    pub fn into_matrix(self) -> Array2<f64> {
        self.0
    }
}

impl TryFrom<Array2<f64>> for CorrelationBox {
    type Error = BoxError;

    fn try_from(matrix: Array2<f64>) -> Result<Self, Self::Error> {
        Self::from_matrix(matrix)
    }
}

impl From<CorrelationBox> for Array2<f64> {
    fn from(b: CorrelationBox) -> Self {
        b.0
    }
}
