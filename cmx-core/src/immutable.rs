//! Copy-on-write matrix
//!
//! Rows are reference-counted units. Changing operations allocate a new
//! matrix; `set` copies only the row it touches and shares the rest with the
//! source, so older instances never observe a write.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use num_traits::Zero;

use crate::dot::dot;
use crate::error::{MatrixError, MatrixResult, Operation};
use crate::grid::{self, C64, Grid};
use crate::mutable::MutableMatrix;
use crate::render;
use crate::transpose::Transpose;
use crate::traits::{Builder, Discipline, MapFn, Matrix};

/// Immutable complex matrix
///
/// `Clone` is cheap: clones share rows, which are never written in place.
/// Safe to share read-only across threads.
#[derive(Clone, Debug, Default)]
pub struct ImmutableMatrix {
    rows: Vec<Arc<Vec<C64>>>,
    columns: usize,
}

impl ImmutableMatrix {
    /// Builds a matrix from a rectangular grid.
    ///
    /// Fails with `IrregularShape` when row lengths differ. Empty input (or
    /// rows of length zero) gives the empty matrix.
    pub fn new(grid: Grid) -> MatrixResult<Self> {
        let (rows, _) = grid::shape_of(&grid)?;
        if rows == 0 {
            return Ok(Self::empty());
        }
        Ok(Self::from_valid(grid))
    }

    /// Builds a matrix from equally-shaped real and imaginary grids.
    pub fn from_parts(real: &[Vec<f64>], imag: &[Vec<f64>]) -> MatrixResult<Self> {
        Self::new(grid::combine(real, imag)?)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::from_valid(grid::zeros(rows, columns))
    }

    /// Wraps a grid already known to be rectangular.
    pub(crate) fn from_valid(grid: Grid) -> Self {
        let columns = grid.first().map_or(0, Vec::len);
        if columns == 0 {
            return Self::empty();
        }
        Self {
            rows: grid.into_iter().map(Arc::new).collect(),
            columns,
        }
    }

    fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> C64) -> Self {
        if rows == 0 || columns == 0 {
            return Self::empty();
        }
        Self {
            rows: (0..rows)
                .map(|i| Arc::new((0..columns).map(|j| f(i, j)).collect()))
                .collect(),
            columns,
        }
    }

    /// Whether `other` holds the same allocation for `row`.
    pub fn shares_row(&self, other: &ImmutableMatrix, row: usize) -> bool {
        match (self.rows.get(row), other.rows.get(row)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn check_bounds(&self, row: usize, column: usize) -> MatrixResult<()> {
        let (rows, columns) = self.dim();
        if row >= rows || column >= columns {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                column,
                rows,
                columns,
            });
        }
        Ok(())
    }
}

impl Matrix for ImmutableMatrix {
    fn dim(&self) -> (usize, usize) {
        if self.rows.is_empty() {
            return (0, 0);
        }
        (self.rows.len(), self.columns)
    }

    fn get(&self, row: usize, column: usize) -> MatrixResult<C64> {
        if self.rows.is_empty() {
            return Ok(C64::zero());
        }
        self.check_bounds(row, column)?;
        Ok(self.rows[row][column])
    }

    fn set(&self, value: C64, row: usize, column: usize) -> MatrixResult<Box<dyn Matrix>> {
        self.check_bounds(row, column)?;
        let mut rows = self.rows.clone();
        // the row is shared with `self`, so make_mut copies it first
        Arc::make_mut(&mut rows[row])[column] = value;
        Ok(Box::new(Self {
            rows,
            columns: self.columns,
        }))
    }

    fn scale(&self, factor: C64) -> Box<dyn Matrix> {
        let (rows, columns) = self.dim();
        Box::new(Self::from_fn(rows, columns, |i, j| self.rows[i][j] * factor))
    }

    fn add(&self, other: &dyn Matrix) -> MatrixResult<Box<dyn Matrix>> {
        let (rows, columns) = self.dim();
        if other.dim() != (rows, columns) {
            return Err(MatrixError::DimensionMismatch {
                operation: Operation::Add,
                left: (rows, columns),
                right: other.dim(),
            });
        }
        let addend = other.to_grid();
        Ok(Box::new(Self::from_fn(rows, columns, |i, j| {
            self.rows[i][j] + addend[i][j]
        })))
    }

    fn transpose(&self) -> Box<dyn Matrix> {
        Box::new(Transpose::new(self.handle()))
    }

    fn dot(&self, other: &dyn Matrix) -> MatrixResult<Box<dyn Matrix>> {
        dot(self, other, self)
    }

    fn map(&self, f: &mut MapFn<'_>) -> Box<dyn Matrix> {
        let (rows, columns) = self.dim();
        Box::new(Self::from_fn(rows, columns, |i, j| f(self.rows[i][j], i, j)))
    }

    fn resize(&self, rows: usize, columns: usize) -> Box<dyn Matrix> {
        let (old_rows, old_columns) = self.dim();
        tracing::debug!(old_rows, old_columns, rows, columns, "resizing immutable matrix");
        Box::new(Self::from_fn(rows, columns, |i, j| {
            if i < old_rows && j < old_columns {
                self.rows[i][j]
            } else {
                C64::zero()
            }
        }))
    }

    fn immutable(&self) -> Box<dyn Matrix> {
        Box::new(self.clone())
    }

    fn mutable(&self) -> Box<dyn Matrix> {
        tracing::trace!(dim = ?self.dim(), "copying immutable matrix into mutable storage");
        Box::new(MutableMatrix::from_valid(self.to_grid()))
    }

    fn discipline(&self) -> Discipline {
        Discipline::Immutable
    }

    fn handle(&self) -> Box<dyn Matrix> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_grid(&self) -> Grid {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }
}

impl Builder for ImmutableMatrix {
    fn build(&self, grid: Grid) -> MatrixResult<Box<dyn Matrix>> {
        Ok(Box::new(Self::new(grid)?))
    }
}

impl fmt::Display for ImmutableMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_matrix(self, f)
    }
}

impl PartialEq for ImmutableMatrix {
    fn eq(&self, other: &Self) -> bool {
        crate::utils::equal(self, other)
    }
}
