use std::fmt;

use crate::spatial::grid::Grid;

/// One glyph per cell, rows separated by `\n`, nothing after the last row.
pub(super) fn write_grid(grid: &Grid, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let width = grid.width() as usize;
    for (row, line) in grid.cells().chunks(width).enumerate() {
        if row > 0 {
            f.write_str("\n")?;
        }
        for &cell in line {
            write!(f, "{}", cell.glyph())?;
        }
    }
    Ok(())
}
