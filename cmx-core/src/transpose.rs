//! Transposed view
//!
//! `Transpose` owns no elements. Every call is forwarded to the wrapped
//! matrix with row and column swapped, so a view over a mutable matrix
//! writes through to it and a view over an immutable matrix keeps producing
//! new matrices.

use std::any::Any;
use std::fmt;

use crate::dot::dot;
use crate::error::{MatrixError, MatrixResult};
use crate::grid::C64;
use crate::render;
use crate::traits::{Discipline, MapFn, Matrix};

/// Zero-copy transposed view over any matrix
#[derive(Debug)]
pub struct Transpose {
    inner: Box<dyn Matrix>,
}

impl Transpose {
    pub fn new(inner: Box<dyn Matrix>) -> Self {
        Self { inner }
    }

    fn wrap(inner: Box<dyn Matrix>) -> Box<dyn Matrix> {
        Box::new(Self::new(inner))
    }
}

impl Matrix for Transpose {
    fn dim(&self) -> (usize, usize) {
        let (rows, columns) = self.inner.dim();
        (columns, rows)
    }

    fn get(&self, row: usize, column: usize) -> MatrixResult<C64> {
        self.inner
            .get(column, row)
            .map_err(MatrixError::transposed)
    }

    fn set(&self, value: C64, row: usize, column: usize) -> MatrixResult<Box<dyn Matrix>> {
        let updated = self
            .inner
            .set(value, column, row)
            .map_err(MatrixError::transposed)?;
        Ok(Self::wrap(updated))
    }

    fn scale(&self, factor: C64) -> Box<dyn Matrix> {
        Self::wrap(self.inner.scale(factor))
    }

    fn add(&self, other: &dyn Matrix) -> MatrixResult<Box<dyn Matrix>> {
        let flipped = other.transpose();
        let sum = self
            .inner
            .add(flipped.as_ref())
            .map_err(MatrixError::transposed)?;
        Ok(Self::wrap(sum))
    }

    fn transpose(&self) -> Box<dyn Matrix> {
        tracing::trace!(discipline = %self.discipline(), "collapsing double transpose");
        self.inner.handle()
    }

    fn dot(&self, other: &dyn Matrix) -> MatrixResult<Box<dyn Matrix>> {
        dot(self, other, &self.discipline())
    }

    fn map(&self, f: &mut MapFn<'_>) -> Box<dyn Matrix> {
        let mut swapped = |value: C64, row: usize, column: usize| f(value, column, row);
        Self::wrap(self.inner.map(&mut swapped))
    }

    fn resize(&self, rows: usize, columns: usize) -> Box<dyn Matrix> {
        Self::wrap(self.inner.resize(columns, rows))
    }

    fn immutable(&self) -> Box<dyn Matrix> {
        Self::wrap(self.inner.immutable())
    }

    fn mutable(&self) -> Box<dyn Matrix> {
        Self::wrap(self.inner.mutable())
    }

    fn discipline(&self) -> Discipline {
        self.inner.discipline()
    }

    fn handle(&self) -> Box<dyn Matrix> {
        Self::wrap(self.inner.handle())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for Transpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_matrix(self, f)
    }
}
