//! Grid - flat, double-buffered storage for a toroidal Life universe
//!
//! Cells live in one row-major `Vec<Cell>` (`idx = row * width + col`) so JS
//! can read the whole generation through a single pointer. The tick writes
//! the next generation into a second buffer and swaps, which keeps every read
//! of a generation on the pre-tick snapshot without allocating per tick.

use crate::domain::cell::Cell;
use crate::error::EngineError;

mod indexing;
mod accessors;
mod neighbors;
mod transition;

pub use transition::GenerationDelta;

/// Double-buffered toroidal grid
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    cells: Vec<Cell>,
    // Scratch for the next generation. After a tick it holds the previous one.
    next: Vec<Cell>,
}

impl Grid {
    /// All-dead grid of `width x height`.
    ///
    /// Fails with `InvalidDimensions` for a zero dimension or when
    /// `width * height` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        let size = checked_size(width, height)?;
        Ok(Self {
            width,
            height,
            size,
            cells: vec![Cell::Dead; size],
            next: vec![Cell::Dead; size],
        })
    }

    /// Grid whose cells are `f(idx, row, col)`.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Result<Self, EngineError>
    where
        F: FnMut(usize, u32, u32) -> Cell,
    {
        let mut grid = Self::new(width, height)?;
        grid.fill_with(f);
        Ok(grid)
    }

    /// Grid over an existing buffer. Dimensions are already known to be valid.
    pub(crate) fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        let size = cells.len();
        Self {
            width,
            height,
            size,
            cells,
            next: vec![Cell::Dead; size],
        }
    }

    /// Overwrite every cell with `f(idx, row, col)`, in index order.
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, u32, u32) -> Cell,
    {
        let width = self.width as usize;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(idx, (idx / width) as u32, (idx % width) as u32);
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }
}

fn checked_size(width: u32, height: u32) -> Result<usize, EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(EngineError::InvalidDimensions { width, height })
}
