//! Parameter tuples `(μ, ν, σ, τ)` of the deterministic boxes fed to the
//! wiring search. Literal data.

use crate::boxes::CorrelationBox;
use crate::error::BoxError;

/// The eight local boxes lying above the PR/SR line that are tested first.
pub const BOXES_ABOVE_TO_BE_TESTED: [[u8; 4]; 8] = [
    [0, 0, 0, 0],
    [0, 1, 0, 1],
    [1, 0, 1, 1],
    [1, 1, 1, 0],
    [0, 0, 1, 0],
    [0, 1, 1, 1],
    [1, 0, 0, 0],
    [1, 1, 0, 1],
];

/// Every deterministic local box, binary counting order.
pub const BOXES_TO_BE_TESTED: [[u8; 4]; 16] = [
    [0, 0, 0, 0],
    [0, 0, 0, 1],
    [0, 0, 1, 0],
    [0, 0, 1, 1],
    [0, 1, 0, 0],
    [0, 1, 0, 1],
    [0, 1, 1, 0],
    [0, 1, 1, 1],
    [1, 0, 0, 0],
    [1, 0, 0, 1],
    [1, 0, 1, 0],
    [1, 0, 1, 1],
    [1, 1, 0, 0],
    [1, 1, 0, 1],
    [1, 1, 1, 0],
    [1, 1, 1, 1],
];

/// Build the local boxes for a list of `(μ, ν, σ, τ)` tuples.
pub fn local_boxes(params: &[[u8; 4]]) -> Result<Vec<CorrelationBox>, BoxError> {
    params
        .iter()
        .map(|&[mu, nu, sigma, tau]| CorrelationBox::local(mu, nu, sigma, tau))
        .collect()
}
