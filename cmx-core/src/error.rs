//! Error types for cmx-core

use std::fmt;

use thiserror::Error;

/// Result alias for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Operation that compares the shapes of two operands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Element-wise sum
    Add,
    /// Matrix product
    Dot,
    /// Real and imaginary grids merged into one complex grid
    Combine,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Dot => "dot",
            Self::Combine => "combine",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors raised by matrix construction and operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("Irregular shape: row {row} has {found} columns, expected {expected}")]
    IrregularShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Dimension mismatch in {operation}: {left:?} vs {right:?}")]
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Index ({row}, {column}) out of bounds for {rows}x{columns} matrix")]
    IndexOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

impl MatrixError {
    /// Restates an error raised by a wrapped matrix in the coordinates of a
    /// transposed view over it.
    pub fn transposed(self) -> Self {
        match self {
            Self::IndexOutOfBounds {
                row,
                column,
                rows,
                columns,
            } => Self::IndexOutOfBounds {
                row: column,
                column: row,
                rows: columns,
                columns: rows,
            },
            Self::DimensionMismatch {
                operation,
                left,
                right,
            } => Self::DimensionMismatch {
                operation,
                left: (left.1, left.0),
                right: (right.1, right.0),
            },
            irregular @ Self::IrregularShape { .. } => irregular,
        }
    }
}
