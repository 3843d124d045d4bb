//! The matrix contract and the builder capability
//!
//! Every matrix variant implements [`Matrix`]. Operations behave the same in
//! observable result across variants; what differs is whether a changing
//! operation allocates a new matrix ([`Discipline::Immutable`]) or writes
//! through to shared storage and hands back the same instance
//! ([`Discipline::Mutable`]).

use std::any::Any;
use std::fmt;

use crate::error::MatrixResult;
use crate::grid::{C64, Grid};
use crate::immutable::ImmutableMatrix;
use crate::mutable::MutableMatrix;

/// Element-wise mapping function: receives the element and its coordinates.
pub type MapFn<'a> = dyn FnMut(C64, usize, usize) -> C64 + 'a;

/// Capability set shared by every matrix variant.
pub trait Matrix: fmt::Debug + fmt::Display {
    /// Dimensions as `(rows, columns)`; `(0, 0)` for the empty matrix.
    fn dim(&self) -> (usize, usize);

    /// Element at `(row, column)`.
    ///
    /// The empty matrix reads as zero everywhere. A populated matrix fails
    /// with `IndexOutOfBounds` outside `[0, rows) x [0, columns)`.
    fn get(&self, row: usize, column: usize) -> MatrixResult<C64>;

    /// Writes one element.
    fn set(&self, value: C64, row: usize, column: usize) -> MatrixResult<Box<dyn Matrix>>;

    /// Multiplies every element by `factor`.
    fn scale(&self, factor: C64) -> Box<dyn Matrix>;

    /// Element-wise sum; both operands must share dimensions.
    fn add(&self, other: &dyn Matrix) -> MatrixResult<Box<dyn Matrix>>;

    /// Transposed view over this matrix.
    fn transpose(&self) -> Box<dyn Matrix>;

    /// Matrix product `self · other`. Always a new matrix.
    fn dot(&self, other: &dyn Matrix) -> MatrixResult<Box<dyn Matrix>>;

    /// Replaces every element with `f(element, row, column)`.
    fn map(&self, f: &mut MapFn<'_>) -> Box<dyn Matrix>;

    /// Matrix of the requested dimensions. Shared coordinates keep their
    /// value, new ones are zero.
    fn resize(&self, rows: usize, columns: usize) -> Box<dyn Matrix>;

    /// Immutable version of this matrix.
    fn immutable(&self) -> Box<dyn Matrix>;

    /// Mutable version of this matrix, never aliasing the receiver.
    fn mutable(&self) -> Box<dyn Matrix>;

    /// Discipline of the storage-owning matrix underneath any views.
    fn discipline(&self) -> Discipline;

    /// New handle to this matrix.
    ///
    /// Immutable matrices give an independent copy, mutable matrices give an
    /// alias of the same storage and views give a view over the handle of
    /// what they wrap. Collapsing a transpose hands back this handle.
    fn handle(&self) -> Box<dyn Matrix>;

    /// Concrete variant behind the trait object, for downcasting.
    fn as_any(&self) -> &dyn Any;

    fn is_empty(&self) -> bool {
        let (rows, columns) = self.dim();
        rows == 0 || columns == 0
    }

    /// Freshly allocated copy of every element.
    fn to_grid(&self) -> Grid {
        let (rows, columns) = self.dim();
        (0..rows)
            .map(|i| {
                (0..columns)
                    .map(|j| self.get(i, j).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Wraps a raw grid into a matrix of a particular discipline.
///
/// Generic algorithms compute raw grids and let a builder decide the
/// concrete representation of their result.
pub trait Builder {
    fn build(&self, grid: Grid) -> MatrixResult<Box<dyn Matrix>>;
}

/// Storage discipline of a matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Discipline {
    /// Changing operations allocate a new matrix
    #[default]
    Immutable,
    /// Changing operations write through and return the same instance
    Mutable,
}

impl Discipline {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Immutable => "immutable",
            Self::Mutable => "mutable",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Builder for Discipline {
    fn build(&self, grid: Grid) -> MatrixResult<Box<dyn Matrix>> {
        Ok(match self {
            Self::Immutable => Box::new(ImmutableMatrix::new(grid)?),
            Self::Mutable => Box::new(MutableMatrix::new(grid)?),
        })
    }
}
