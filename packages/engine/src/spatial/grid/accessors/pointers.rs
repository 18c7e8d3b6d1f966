use super::super::*;

impl Grid {
    // === Raw pointer for JS interop ===

    /// Start of the current generation in linear memory.
    ///
    /// The two buffers swap on every tick, so the pointer is only valid until
    /// the next mutating call.
    pub fn cells_ptr(&self) -> *const Cell {
        self.cells.as_ptr()
    }

    /// Current generation as plain bytes (0 = dead, 1 = alive).
    pub fn cells_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| c as u8).collect()
    }
}
