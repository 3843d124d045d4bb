//! Text rendering
//!
//! Renders any matrix through `dim`/`get` only. Each row is written as
//! `row_prefix`, the elements joined by `column_separator`, then
//! `row_suffix`.

use std::fmt;

use crate::grid::C64;
use crate::traits::{Discipline, Matrix};

/// Configuration for the matrix renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Written before the first element of every row
    pub row_prefix: String,

    /// Written after the last element of every row
    pub row_suffix: String,

    /// Written between elements of a row
    pub column_separator: String,

    /// Wrap each element in parentheses
    pub parenthesize: bool,

    /// Fixed number of decimal places, if any
    pub precision: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::inline()
    }
}

impl RenderConfig {
    /// Single-line bracketed rows: `[(1+1i), (2+2i)], `
    pub fn inline() -> Self {
        Self {
            row_prefix: "[".to_string(),
            row_suffix: "], ".to_string(),
            column_separator: ", ".to_string(),
            parenthesize: true,
            precision: None,
        }
    }

    /// Single-line braced rows, used for mutable matrices
    pub fn braces() -> Self {
        Self {
            row_prefix: "{".to_string(),
            row_suffix: "}, ".to_string(),
            ..Self::inline()
        }
    }

    /// One bracketed row per line
    pub fn lines() -> Self {
        Self {
            row_suffix: "],\n".to_string(),
            ..Self::inline()
        }
    }

    /// Builds a configuration from the three row tokens.
    pub fn custom(row_prefix: &str, row_suffix: &str, column_separator: &str) -> Self {
        Self {
            row_prefix: row_prefix.to_string(),
            row_suffix: row_suffix.to_string(),
            column_separator: column_separator.to_string(),
            ..Self::inline()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    fn write_element(&self, out: &mut String, value: C64) {
        let text = match self.precision {
            Some(precision) => format!("{:.*}", precision, value),
            None => value.to_string(),
        };
        if self.parenthesize {
            out.push('(');
            out.push_str(&text);
            out.push(')');
        } else {
            out.push_str(&text);
        }
    }
}

/// Renders `m` with `config`.
pub fn render(m: &dyn Matrix, config: &RenderConfig) -> String {
    let (rows, columns) = m.dim();
    let mut out = String::new();
    for i in 0..rows {
        out.push_str(&config.row_prefix);
        for j in 0..columns {
            if j > 0 {
                out.push_str(&config.column_separator);
            }
            config.write_element(&mut out, m.get(i, j).unwrap_or_default());
        }
        out.push_str(&config.row_suffix);
    }
    out
}

/// Renders `m` with the given row tokens.
pub fn render_custom(
    m: &dyn Matrix,
    row_prefix: &str,
    row_suffix: &str,
    column_separator: &str,
) -> String {
    render(m, &RenderConfig::custom(row_prefix, row_suffix, column_separator))
}

/// Renders `m` one row per line.
pub fn render_lines(m: &dyn Matrix) -> String {
    render(m, &RenderConfig::lines())
}

/// `Display` for every variant, styled after the innermost discipline.
pub(crate) fn fmt_matrix(m: &dyn Matrix, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match m.discipline() {
        Discipline::Immutable => f.write_str(&render(m, &RenderConfig::inline())),
        Discipline::Mutable => write!(f, "{{{}}}", render(m, &RenderConfig::braces())),
    }
}
