use crate::domain::cell::Cell;
use crate::domain::seed::SeedPattern;
use crate::error::EngineError;
use crate::spatial::grid::Grid;

use super::perf_stats::PerfStats;
use super::{UniverseConfig, UniverseCore, DEFAULT_HEIGHT, DEFAULT_WIDTH};

fn assemble(grid: Grid, perf_enabled: bool) -> UniverseCore {
    UniverseCore {
        initial: grid.cells().to_vec(),
        grid,
        generation: 0,
        perf_enabled,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn create_universe_core(
    width: u32,
    height: u32,
    seed: &SeedPattern,
) -> Result<UniverseCore, EngineError> {
    let mut grid = Grid::new(width, height)?;
    seed.apply(&mut grid)?;
    console_debug!(
        "universe {}x{} seeded with {} ({} alive)",
        width,
        height,
        seed.kind(),
        grid.live_count()
    );
    Ok(assemble(grid, false))
}

pub(super) fn create_universe_core_from_fn<F>(
    width: u32,
    height: u32,
    f: F,
) -> Result<UniverseCore, EngineError>
where
    F: FnMut(usize, u32, u32) -> Cell,
{
    let grid = Grid::from_fn(width, height, f)?;
    console_debug!("universe {}x{} seeded from fn ({} alive)", width, height, grid.live_count());
    Ok(assemble(grid, false))
}

pub(super) fn create_universe_core_from_config(
    config: &UniverseConfig,
) -> Result<UniverseCore, EngineError> {
    let mut core = create_universe_core(config.width, config.height, &config.seed)?;
    core.perf_enabled = config.perf_metrics;
    Ok(core)
}

pub(super) fn create_default_universe_core() -> UniverseCore {
    const _: () = assert!(DEFAULT_WIDTH > 0 && DEFAULT_HEIGHT > 0);

    match create_universe_core(DEFAULT_WIDTH, DEFAULT_HEIGHT, &SeedPattern::default()) {
        Ok(core) => core,
        Err(err) => {
            // Constant dimensions and the modulo seed never fail; stay usable if they do
            console_log!("default universe rejected ({}), starting empty", err);
            let size = DEFAULT_WIDTH as usize * DEFAULT_HEIGHT as usize;
            let grid = Grid::from_cells(DEFAULT_WIDTH, DEFAULT_HEIGHT, vec![Cell::Dead; size]);
            assemble(grid, false)
        }
    }
}
