use super::{PerfTimer, UniverseCore};

// JS-facing counters are u32; grids past u32::MAX cells clamp
fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

pub(super) fn tick(universe: &mut UniverseCore) {
    if !universe.perf_enabled {
        universe.grid.step_generation();
        universe.generation += 1;
        return;
    }

    let t0 = PerfTimer::start();
    universe.grid.step_generation();
    universe.generation += 1;
    let tick_ms = t0.elapsed_ms();

    // Counting pass runs outside the timed section
    let delta = universe.grid.last_delta();
    let stats = &mut universe.perf_stats;
    stats.reset();
    stats.tick_ms = tick_ms;
    stats.cells_processed = saturating_u32(universe.grid.size());
    stats.births = delta.births;
    stats.deaths = delta.deaths;
    stats.live_cells = saturating_u32(universe.grid.live_count());
    stats.generation = universe.generation;
}
