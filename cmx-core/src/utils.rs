//! Comparison and decomposition helpers built on `dim`/`get`

use crate::grid::C64;
use crate::traits::Matrix;

/// True when both matrices have the same dimensions and every pair of
/// corresponding elements compares exactly equal.
pub fn equal(a: &dyn Matrix, b: &dyn Matrix) -> bool {
    let (rows, columns) = a.dim();
    if b.dim() != (rows, columns) {
        return false;
    }
    (0..rows).all(|i| {
        (0..columns).all(|j| matches!((a.get(i, j), b.get(i, j)), (Ok(x), Ok(y)) if x == y))
    })
}

fn extract(m: &dyn Matrix, part: impl Fn(C64) -> f64) -> Vec<Vec<f64>> {
    let (rows, columns) = m.dim();
    (0..rows)
        .map(|i| {
            (0..columns)
                .map(|j| part(m.get(i, j).unwrap_or_default()))
                .collect()
        })
        .collect()
}

/// Real part of every element, as a fresh grid.
pub fn real(m: &dyn Matrix) -> Vec<Vec<f64>> {
    extract(m, |v| v.re)
}

/// Imaginary part of every element, as a fresh grid.
pub fn imag(m: &dyn Matrix) -> Vec<Vec<f64>> {
    extract(m, |v| v.im)
}

/// Real and imaginary grids in one pass.
pub fn parts(m: &dyn Matrix) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    m.to_grid()
        .into_iter()
        .map(|row| -> (Vec<f64>, Vec<f64>) { row.iter().map(|v| (v.re, v.im)).unzip() })
        .unzip()
}
