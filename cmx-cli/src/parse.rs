//! Inline matrix text
//!
//! Rows are separated by `;` and elements by `,`. Each element is a complex
//! literal such as `1+2i`, `-3` or `4i`.

use anyhow::{Context, Result, bail};
use cmx_core::{C64, Grid};

pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut grid = Grid::new();

    for (i, row) in text.split(';').enumerate() {
        let row = row.trim();
        if row.is_empty() {
            continue;
        }

        let parsed = row
            .split(',')
            .enumerate()
            .map(|(j, cell)| parse_element(cell).with_context(|| format!("row {}, column {}", i, j)))
            .collect::<Result<Vec<C64>>>()?;
        grid.push(parsed);
    }

    Ok(grid)
}

pub fn parse_element(text: &str) -> Result<C64> {
    let text = text.trim();
    if text.is_empty() {
        bail!("empty element");
    }
    text.parse::<C64>()
        .with_context(|| format!("invalid complex literal '{}'", text))
}
