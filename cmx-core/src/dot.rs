//! Matrix product
//!
//! Textbook O(p·q·r) multiply-accumulate. The algorithm only reads its
//! operands through the contract and hands the raw result to a [`Builder`],
//! which decides the discipline of the output.

use num_traits::Zero;

use crate::error::{MatrixError, MatrixResult, Operation};
use crate::grid::{C64, Grid};
use crate::traits::{Builder, Matrix};

/// Computes `a · b` and wraps the result with `builder`.
///
/// Fails with `DimensionMismatch` unless the column count of `a` equals the
/// row count of `b`.
pub fn dot(a: &dyn Matrix, b: &dyn Matrix, builder: &dyn Builder) -> MatrixResult<Box<dyn Matrix>> {
    let (target_rows, inner) = a.dim();
    let (b_inner, target_columns) = b.dim();
    if inner != b_inner {
        return Err(MatrixError::DimensionMismatch {
            operation: Operation::Dot,
            left: a.dim(),
            right: b.dim(),
        });
    }

    tracing::debug!(
        rows = target_rows,
        inner,
        columns = target_columns,
        discipline = %a.discipline(),
        "computing dot product"
    );

    let mut target: Grid = Vec::with_capacity(target_rows);
    for i in 0..target_rows {
        let mut row = Vec::with_capacity(target_columns);
        for j in 0..target_columns {
            let mut total = C64::zero();
            for k in 0..inner {
                total += a.get(i, k)? * b.get(k, j)?;
            }
            row.push(total);
        }
        target.push(row);
    }
    builder.build(target)
}
