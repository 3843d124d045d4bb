//! Raw element grids and shape validation

use num_complex::Complex64;
use num_traits::Zero;

use crate::error::{MatrixError, MatrixResult, Operation};

/// Complex element: 64-bit real and imaginary parts
pub type C64 = Complex64;

/// Row-major rectangular grid of elements
pub type Grid = Vec<Vec<C64>>;

/// Validates rectangularity and returns the shape of `grid`.
///
/// Grids without rows or with zero-length rows are the empty shape `(0, 0)`.
pub fn shape_of<T>(grid: &[Vec<T>]) -> MatrixResult<(usize, usize)> {
    let Some(first) = grid.first() else {
        return Ok((0, 0));
    };
    let expected = first.len();

    if let Some((row, found)) = grid
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(MatrixError::IrregularShape {
            row,
            expected,
            found,
        });
    }

    if expected == 0 {
        return Ok((0, 0));
    }
    Ok((grid.len(), expected))
}

/// Zero-filled grid; empty when either dimension is zero
pub fn zeros(rows: usize, columns: usize) -> Grid {
    if rows == 0 || columns == 0 {
        return Vec::new();
    }
    vec![vec![C64::zero(); columns]; rows]
}

/// Merges equally-shaped real and imaginary grids into one complex grid.
pub fn combine(real: &[Vec<f64>], imag: &[Vec<f64>]) -> MatrixResult<Grid> {
    let real_shape = shape_of(real)?;
    let imag_shape = shape_of(imag)?;
    if real_shape != imag_shape {
        return Err(MatrixError::DimensionMismatch {
            operation: Operation::Combine,
            left: real_shape,
            right: imag_shape,
        });
    }
    if real_shape.0 == 0 {
        return Ok(Vec::new());
    }

    Ok(real
        .iter()
        .zip(imag)
        .map(|(re_row, im_row)| {
            re_row
                .iter()
                .zip(im_row)
                .map(|(&re, &im)| C64::new(re, im))
                .collect()
        })
        .collect())
}
