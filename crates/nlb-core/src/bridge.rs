//! # Matrix ⇄ Tensor Bridge
//!
//! Boxes are naturally 4×4 matrices `P[2x + y, 2a + b]`, while the wiring
//! codec indexes everything by individual bits. This module relabels the
//! same sixteen numbers as a `(2, 2, 2, 2)` tensor `T[a, b, x, y]`.
//!
//! ## Relabeling
//!
//! ```text
//! matrix (4, 4)  --reshape-->  (x, y, a, b)  --swap 0↔2, 1↔3-->  (a, b, x, y)
//! ```
//!
//! The inverse undoes the two swaps and flattens back. Both directions are
//! pure index permutations: no arithmetic touches the entries, so round
//! trips are exact.

use ndarray::{Array1, Array2, Array4, ArrayView2, ArrayView4};

use crate::error::BoxError;

/// Shape of the matrix form.
pub const MATRIX_SHAPE: [usize; 2] = [4, 4];

/// Shape of the tensor form.
pub const TENSOR_SHAPE: [usize; 4] = [2, 2, 2, 2];

fn check_shape(actual: &[usize], expected: &[usize]) -> Result<(), BoxError> {
    if actual != expected {
        return Err(BoxError::InvalidShape {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        });
    }
    Ok(())
}

/// Relabel a 4×4 box matrix into the tensor `T[a, b, x, y]`.
///
/// # Errors
///
/// Returns [`BoxError::InvalidShape`] if the input is not 4×4.
pub fn matrix_to_tensor(matrix: ArrayView2<'_, f64>) -> Result<Array4<f64>, BoxError> {
    check_shape(matrix.shape(), &MATRIX_SHAPE)?;
    let mut tensor = matrix
        .as_standard_layout()
        .into_owned()
        .into_shape((2, 2, 2, 2))
        .map_err(|_| BoxError::InvalidShape {
            expected: TENSOR_SHAPE.to_vec(),
            actual: matrix.shape().to_vec(),
        })?;
    tensor.swap_axes(0, 2);
    tensor.swap_axes(1, 3);
    Ok(tensor.as_standard_layout().into_owned())
}

/// Relabel a tensor `T[a, b, x, y]` back into the 4×4 matrix form.
///
/// # Errors
///
/// Returns [`BoxError::InvalidShape`] if the input is not `(2, 2, 2, 2)`.
pub fn tensor_to_matrix(tensor: ArrayView4<'_, f64>) -> Result<Array2<f64>, BoxError> {
    check_shape(tensor.shape(), &TENSOR_SHAPE)?;
    let mut permuted = tensor;
    permuted.swap_axes(0, 2);
    permuted.swap_axes(1, 3);
    permuted
        .as_standard_layout()
        .into_owned()
        .into_shape((4, 4))
        .map_err(|_| BoxError::InvalidShape {
            expected: MATRIX_SHAPE.to_vec(),
            actual: tensor.shape().to_vec(),
        })
}

/// Flatten a tensor in logical (row-major) order: index `8a + 4b + 2x + y`.
pub fn flatten_tensor(tensor: ArrayView4<'_, f64>) -> Array1<f64> {
    tensor.iter().copied().collect()
}
