use super::super::*;

impl Grid {
    // === Generation view ===

    /// The current generation, row-major.
    ///
    /// Borrowed from the grid, so it cannot outlive the next tick or toggle.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The generation before the last tick. Only meaningful right after a tick.
    #[inline]
    pub(crate) fn previous_cells(&self) -> &[Cell] {
        &self.next
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    // === Checked cell access ===
    pub fn get(&self, row: u32, col: u32) -> Result<Cell, EngineError> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: u32, col: u32, cell: Cell) -> Result<(), EngineError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip one cell and return its new state. Nothing changes on error.
    pub fn toggle(&mut self, row: u32, col: u32) -> Result<Cell, EngineError> {
        let idx = self.checked_index(row, col)?;
        let flipped = self.cells[idx].toggled();
        self.cells[idx] = flipped;
        Ok(flipped)
    }

    #[inline]
    pub(crate) fn set_index(&mut self, idx: usize, cell: Cell) {
        self.cells[idx] = cell;
    }

    /// Replace the whole generation. `cells.len()` must equal `size()`.
    pub(crate) fn copy_from(&mut self, cells: &[Cell]) {
        self.cells.copy_from_slice(cells);
    }
}
