use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===

    /// Linear index of `(row, col)`. Caller guarantees the coordinate is in bounds.
    #[inline]
    pub(crate) fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(
            self.in_bounds(row, col),
            "index: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.height,
            self.width
        );
        row as usize * self.width as usize + col as usize
    }

    /// Inverse of `index`: `(row, col)` of a linear index.
    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let width = self.width as usize;
        ((idx / width) as u32, (idx % width) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    /// Linear index of `(row, col)`, or `IndexOutOfRange`.
    #[inline]
    pub fn checked_index(&self, row: u32, col: u32) -> Result<usize, EngineError> {
        if self.in_bounds(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(EngineError::IndexOutOfRange {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }
}
