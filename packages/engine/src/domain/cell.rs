//! Cell state and the Life transition rule

use wasm_bindgen::prelude::*;

/// Glyph used by the text renderer for a dead cell.
pub const DEAD_GLYPH: char = '◻';
/// Glyph used by the text renderer for a live cell.
pub const ALIVE_GLYPH: char = '◼';

/// One cell of the universe.
///
/// `repr(u8)` with Dead = 0 and Alive = 1 lets JS read the cell buffer as a
/// `Uint8Array` and lets the neighbor count sum cells as integers.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[inline]
    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// B3/S23: survive on 2 or 3 live neighbors, born on exactly 3.
    #[inline]
    pub fn next_state(self, live_neighbors: u8) -> Cell {
        match (self, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Cell::Dead => DEAD_GLYPH,
            Cell::Alive => ALIVE_GLYPH,
        }
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}
