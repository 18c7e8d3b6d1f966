//! Generation transition
//!
//! Every cell of the next buffer is computed from the current buffer only,
//! then the buffers swap. No cell ever sees a partially updated generation.

use super::neighbors::count_live;
use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Births and deaths between two consecutive generations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationDelta {
    pub births: u32,
    pub deaths: u32,
}

/// Fill one row of the next generation from `prev`.
#[inline]
fn evolve_row(prev: &[Cell], width: u32, height: u32, row: u32, out: &mut [Cell]) {
    let row_base = row as usize * width as usize;
    for (col, slot) in out.iter_mut().enumerate() {
        let cell = *fast!(prev, [row_base + col]);
        let live = count_live(prev, width, height, row, col as u32);
        *slot = cell.next_state(live);
    }
}

impl Grid {
    /// Advance one generation.
    /// Rows are evaluated in parallel with Rayon when the feature is enabled;
    /// the result does not depend on evaluation order.
    pub fn step_generation(&mut self) {
        let width = self.width;
        let height = self.height;
        let prev = &self.cells;
        let next = &mut self.next;

        #[cfg(feature = "parallel")]
        {
            next.par_chunks_mut(width as usize)
                .enumerate()
                .for_each(|(row, out)| evolve_row(prev, width, height, row as u32, out));
        }
        #[cfg(not(feature = "parallel"))]
        {
            next.chunks_mut(width as usize)
                .enumerate()
                .for_each(|(row, out)| evolve_row(prev, width, height, row as u32, out));
        }

        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Births and deaths of the last tick, comparing against the previous buffer.
    pub(crate) fn last_delta(&self) -> GenerationDelta {
        let mut delta = GenerationDelta::default();
        for (&before, &after) in self.previous_cells().iter().zip(self.cells.iter()) {
            match (before, after) {
                (Cell::Dead, Cell::Alive) => delta.births = delta.births.saturating_add(1),
                (Cell::Alive, Cell::Dead) => delta.deaths = delta.deaths.saturating_add(1),
                _ => {}
            }
        }
        delta
    }
}
