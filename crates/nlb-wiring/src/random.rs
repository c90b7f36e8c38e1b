//! Random wiring batches for seeding the search.
//!
//! The caller owns the generator, so runs are reproducible with a seeded
//! [`rand::rngs::StdRng`].

use ndarray::Array2;
use rand::Rng;

use nlb_core::WiringError;

use crate::layout::WIRING_LEN;
use crate::wiring::{ExtremalWiringBatch, RelaxedWiringBatch};

/// `n` relaxed wirings with entries uniform in `[0, 1)`, marked trainable.
///
/// # Errors
///
/// Returns [`WiringError::InvalidColumnCount`] when `n` is zero.
pub fn random_wiring<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
) -> Result<RelaxedWiringBatch, WiringError> {
    if n == 0 {
        return Err(WiringError::InvalidColumnCount(n));
    }
    let columns = Array2::from_shape_simple_fn((WIRING_LEN, n), || rng.gen::<f64>());
    tracing::debug!(columns = n, "sampled relaxed wirings");
    RelaxedWiringBatch::from_array(columns, true)
}

/// `n` classical wirings with independent fair bits.
///
/// # Errors
///
/// Returns [`WiringError::InvalidColumnCount`] when `n` is zero.
pub fn random_extremal_wiring<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
) -> Result<ExtremalWiringBatch, WiringError> {
    if n == 0 {
        return Err(WiringError::InvalidColumnCount(n));
    }
    let columns = Array2::from_shape_simple_fn((WIRING_LEN, n), || u8::from(rng.gen::<bool>()));
    tracing::debug!(columns = n, "sampled extremal wirings");
    ExtremalWiringBatch::from_array(columns)
}
