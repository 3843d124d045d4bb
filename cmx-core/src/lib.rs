//! # 🧮 cmx-core — Complex Matrices
//!
//! Complex-number matrices with two interchangeable storage disciplines and a
//! lazy transposed view over either, all behind the [`Matrix`] contract.
//!
//! - [`ImmutableMatrix`]: copy-on-write. Changing operations return a new
//!   matrix; only touched rows are copied.
//! - [`MutableMatrix`]: in place. Changing operations write through and
//!   return the same storage.
//! - [`Transpose`]: zero-copy view that swaps coordinates and forwards every
//!   call, including writes, to the matrix it wraps.
//!
//! ## Computational Complexity
//!
//! **Dot product — O(R × L × C):**
//! - textbook multiply-accumulate, sequential
//! - the result discipline is chosen by a [`Builder`]
//!
//! **Immutable `set` — O(R + C):**
//! - the row index is cloned, the touched row is copied
//!
//! **Transpose — O(1):**
//! - no element is copied until a conversion asks for it
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 trait Matrix                    │
//! │  ┌──────────────────┐  ┌─────────────────────┐  │
//! │  │ ImmutableMatrix  │  │   MutableMatrix     │  │
//! │  │ Vec<Arc<row>>    │  │ Rc<RefCell<Grid>>   │  │
//! │  └────────┬─────────┘  └──────────┬──────────┘  │
//! │           └──── Transpose ────────┘             │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  dot(a, b, &dyn Builder)                  │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use cmx_core::prelude::*;
//!
//! let a = ImmutableMatrix::new(vec![
//!     vec![C64::new(1.0, 1.0), C64::new(2.0, 2.0)],
//!     vec![C64::new(3.0, 3.0), C64::new(4.0, 4.0)],
//! ])?;
//! let b = ImmutableMatrix::new(vec![vec![C64::new(1.0, 0.0)], vec![C64::new(0.0, 1.0)]])?;
//!
//! let product = a.dot(&b)?;
//! assert_eq!(product.get(0, 0)?, C64::new(-1.0, 3.0));
//! assert_eq!(product.get(1, 0)?, C64::new(-1.0, 7.0));
//! # Ok::<(), MatrixError>(())
//! ```

pub mod dot;
pub mod error;
pub mod grid;
pub mod immutable;
pub mod mutable;
pub mod render;
pub mod traits;
pub mod transpose;
pub mod utils;

pub use dot::dot;
pub use error::{MatrixError, MatrixResult, Operation};
pub use grid::{C64, Grid, combine, zeros};
pub use immutable::ImmutableMatrix;
pub use mutable::MutableMatrix;
pub use render::{RenderConfig, render, render_custom, render_lines};
pub use traits::{Builder, Discipline, MapFn, Matrix};
pub use transpose::Transpose;
pub use utils::{equal, imag, parts, real};

pub mod prelude {
    pub use crate::{
        Builder, C64, Discipline, Grid, ImmutableMatrix, Matrix, MatrixError, MatrixResult,
        MutableMatrix, RenderConfig, Transpose,
    };
}

#[cfg(test)]
mod tests;
