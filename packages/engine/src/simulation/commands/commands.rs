use crate::domain::cell::Cell;
use crate::error::EngineError;

use super::UniverseCore;

pub(super) fn toggle_cell(universe: &mut UniverseCore, row: u32, col: u32) -> Result<Cell, EngineError> {
    universe.grid.toggle(row, col)
}

pub(super) fn set_cell(universe: &mut UniverseCore, row: u32, col: u32, cell: Cell) -> Result<(), EngineError> {
    universe.grid.set(row, col, cell)
}

pub(super) fn set_cells(universe: &mut UniverseCore, cells: &[(u32, u32)]) -> Result<(), EngineError> {
    // Validate everything before touching the grid
    let indices = cells
        .iter()
        .map(|&(row, col)| universe.grid.checked_index(row, col))
        .collect::<Result<Vec<_>, _>>()?;

    for idx in indices {
        universe.grid.set_index(idx, Cell::Alive);
    }
    Ok(())
}

pub(super) fn clear(universe: &mut UniverseCore) {
    universe.grid.clear();
    universe.generation = 0;
    console_log!("universe cleared");
}

pub(super) fn reset(universe: &mut UniverseCore) {
    universe.grid.copy_from(&universe.initial);
    universe.generation = 0;
    console_log!("universe reset to generation 0");
}
