//! Toroidal neighbor counting
//!
//! Rows and columns wrap, so every cell has exactly eight neighbor slots. On
//! grids narrower than three cells some slots alias the same cell (or the
//! cell itself); each slot is still counted on its own.

use super::*;

/// Previous and next coordinate on an axis of length `len`, wrapping at both ends.
#[inline(always)]
fn wrap_around(pos: u32, len: u32) -> (u32, u32) {
    let before = if pos == 0 { len - 1 } else { pos - 1 };
    let after = if pos + 1 == len { 0 } else { pos + 1 };
    (before, after)
}

/// Live neighbors of `(row, col)` in `cells`, a `width x height` buffer.
///
/// Takes the buffer explicitly so the tick can count against the previous
/// generation while it writes the next one.
#[inline]
pub(super) fn count_live(cells: &[Cell], width: u32, height: u32, row: u32, col: u32) -> u8 {
    let (north, south) = wrap_around(row, height);
    let (west, east) = wrap_around(col, width);
    let w = width as usize;

    let rows = [north as usize * w, row as usize * w, south as usize * w];
    let cols = [west as usize, col as usize, east as usize];

    let mut count = 0u8;
    for (dr, &row_base) in rows.iter().enumerate() {
        for (dc, &c) in cols.iter().enumerate() {
            if dr == 1 && dc == 1 {
                continue;
            }
            count += *fast!(cells, [row_base + c]) as u8;
        }
    }
    count
}

impl Grid {
    /// Live neighbors of `(row, col)` in the current generation.
    ///
    /// Out-of-range coordinates are rejected before any slot is read.
    #[inline]
    pub fn live_neighbor_count(&self, row: u32, col: u32) -> Result<u8, EngineError> {
        self.checked_index(row, col)?;
        Ok(count_live(&self.cells, self.width, self.height, row, col))
    }
}
