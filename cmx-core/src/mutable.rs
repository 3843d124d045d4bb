//! In-place matrix
//!
//! A `MutableMatrix` is a handle to shared storage. Changing operations write
//! through and hand back another handle to the same storage, so every holder
//! (including transposed views) observes the write.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use num_traits::Zero;

use crate::dot::dot;
use crate::error::{MatrixError, MatrixResult, Operation};
use crate::grid::{self, C64, Grid};
use crate::immutable::ImmutableMatrix;
use crate::render;
use crate::transpose::Transpose;
use crate::traits::{Builder, Discipline, MapFn, Matrix};

/// Mutable complex matrix
///
/// `Clone` aliases: the clone shares storage with the original. Use
/// [`MutableMatrix::deep_copy`] for an independent matrix.
#[derive(Clone, Default)]
pub struct MutableMatrix {
    grid: Rc<RefCell<Grid>>,
}

impl MutableMatrix {
    /// Builds a matrix from a rectangular grid, taking ownership of it.
    ///
    /// Fails with `IrregularShape` when row lengths differ.
    pub fn new(grid: Grid) -> MatrixResult<Self> {
        let (rows, _) = grid::shape_of(&grid)?;
        if rows == 0 {
            return Ok(Self::default());
        }
        Ok(Self::from_valid(grid))
    }

    /// Builds a matrix from equally-shaped real and imaginary grids.
    pub fn from_parts(real: &[Vec<f64>], imag: &[Vec<f64>]) -> MatrixResult<Self> {
        Self::new(grid::combine(real, imag)?)
    }

    /// Zero-filled matrix of the given size
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::from_valid(grid::zeros(rows, columns))
    }

    pub(crate) fn from_valid(grid: Grid) -> Self {
        let grid = if grid.first().is_some_and(|row| !row.is_empty()) {
            grid
        } else {
            Vec::new()
        };
        Self {
            grid: Rc::new(RefCell::new(grid)),
        }
    }

    /// Whether both handles point at the same storage.
    pub fn ptr_eq(&self, other: &MutableMatrix) -> bool {
        Rc::ptr_eq(&self.grid, &other.grid)
    }

    /// Independent copy with its own storage
    pub fn deep_copy(&self) -> Self {
        Self {
            grid: Rc::new(RefCell::new(self.grid.borrow().clone())),
        }
    }

    fn alias(&self) -> Box<dyn Matrix> {
        Box::new(self.clone())
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

impl Matrix for MutableMatrix {
    fn dim(&self) -> (usize, usize) {
        let grid = self.grid.borrow();
        match grid.first() {
            Some(row) if !row.is_empty() => (grid.len(), row.len()),
            _ => (0, 0),
        }
    }

    fn get(&self, row: usize, column: usize) -> MatrixResult<C64> {
        if self.is_empty() {
            return Ok(C64::zero());
        }
        self.check_bounds(row, column)?;
        Ok(self.grid.borrow()[row][column])
    }

    fn set(&self, value: C64, row: usize, column: usize) -> MatrixResult<Box<dyn Matrix>> {
        self.check_bounds(row, column)?;
        self.grid.borrow_mut()[row][column] = value;
        Ok(self.alias())
    }

    fn scale(&self, factor: C64) -> Box<dyn Matrix> {
        for value in self.grid.borrow_mut().iter_mut().flatten() {
            *value *= factor;
        }
        self.alias()
    }

    fn add(&self, other: &dyn Matrix) -> MatrixResult<Box<dyn Matrix>> {
        let dim = self.dim();
        if other.dim() != dim {
            return Err(MatrixError::DimensionMismatch {
                operation: Operation::Add,
                left: dim,
                right: other.dim(),
            });
        }
        // snapshot first: `other` may be a view over this same storage
        let addend = other.to_grid();
        let mut grid = self.grid.borrow_mut();
        for (row, addend_row) in grid.iter_mut().zip(&addend) {
            for (value, &rhs) in row.iter_mut().zip(addend_row) {
                *value += rhs;
            }
        }
        drop(grid);
        Ok(self.alias())
    }

    fn transpose(&self) -> Box<dyn Matrix> {
        Box::new(Transpose::new(self.alias()))
    }

    fn dot(&self, other: &dyn Matrix) -> MatrixResult<Box<dyn Matrix>> {
        dot(self, other, self)
    }

    fn map(&self, f: &mut MapFn<'_>) -> Box<dyn Matrix> {
        let (rows, columns) = self.dim();
        for i in 0..rows {
            for j in 0..columns {
                // no borrow is held while `f` runs, it may read this matrix
                let Some(value) = self.grid.borrow().get(i).and_then(|r| r.get(j)).copied() else {
                    continue;
                };
                let mapped = f(value, i, j);
                if let Some(cell) = self.grid.borrow_mut().get_mut(i).and_then(|r| r.get_mut(j)) {
                    *cell = mapped;
                }
            }
        }
        self.alias()
    }

    fn resize(&self, rows: usize, columns: usize) -> Box<dyn Matrix> {
        tracing::debug!(from = ?self.dim(), rows, columns, "resizing mutable matrix in place");
        let mut grid = self.grid.borrow_mut();
        if rows == 0 || columns == 0 {
            grid.clear();
        } else {
            grid.truncate(rows);
            for row in grid.iter_mut() {
                row.resize(columns, C64::zero());
            }
            let missing = rows - grid.len();
            grid.extend(std::iter::repeat_n(vec![C64::zero(); columns], missing));
        }
        drop(grid);
        self.alias()
    }

    fn immutable(&self) -> Box<dyn Matrix> {
        tracing::trace!(dim = ?self.dim(), "copying mutable matrix into immutable storage");
        Box::new(ImmutableMatrix::from_valid(self.to_grid()))
    }

    fn mutable(&self) -> Box<dyn Matrix> {
        Box::new(self.deep_copy())
    }

    fn discipline(&self) -> Discipline {
        Discipline::Mutable
    }

    fn handle(&self) -> Box<dyn Matrix> {
        self.alias()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_grid(&self) -> Grid {
        self.grid.borrow().clone()
    }
}

impl Builder for MutableMatrix {
    fn build(&self, grid: Grid) -> MatrixResult<Box<dyn Matrix>> {
        Ok(Box::new(Self::new(grid)?))
    }
}

impl fmt::Debug for MutableMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableMatrix")
            .field("grid", &*self.grid.borrow())
            .finish()
    }
}

impl fmt::Display for MutableMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_matrix(self, f)
    }
}
