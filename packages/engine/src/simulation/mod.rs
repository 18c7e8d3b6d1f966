//! Universe - orchestration of one Life universe
//!
//! `UniverseCore` owns the grid and the bookkeeping around it (generation
//! counter, generation-0 snapshot, perf metrics). It is plain Rust and is what
//! tests and native hosts use. `facade::Universe` wraps it for JS.
//!
//! The core does no scheduling and no drawing: the host calls `tick`, then
//! reads `cells`, once per generation.

use std::fmt;

use crate::domain::cell::Cell;
use crate::domain::seed::SeedPattern;
use crate::error::EngineError;
use crate::spatial::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "init/config.rs"]
mod config;
#[path = "step/tick.rs"]
mod tick;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_text.rs"]
mod render_text;
mod facade;

pub use config::UniverseConfig;
pub use facade::Universe;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Width of the universe built by `UniverseCore::default()`.
pub const DEFAULT_WIDTH: u32 = 64;
/// Height of the universe built by `UniverseCore::default()`.
pub const DEFAULT_HEIGHT: u32 = 64;

/// The simulation state
pub struct UniverseCore {
    grid: Grid,
    // Generation 0, restored by `reset`
    initial: Vec<Cell>,

    // State
    generation: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl UniverseCore {
    /// Create a universe of the given size populated by `seed`.
    pub fn new(width: u32, height: u32, seed: SeedPattern) -> Result<Self, EngineError> {
        init::create_universe_core(width, height, &seed)
    }

    /// Create a universe whose generation 0 is `f(idx, row, col)`.
    pub fn with_pattern_fn<F>(width: u32, height: u32, f: F) -> Result<Self, EngineError>
    where
        F: FnMut(usize, u32, u32) -> Cell,
    {
        init::create_universe_core_from_fn(width, height, f)
    }

    pub fn from_config(config: &UniverseConfig) -> Result<Self, EngineError> {
        init::create_universe_core_from_config(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, EngineError> {
        let config = UniverseConfig::from_json(json)?;
        Self::from_config(&config)
    }

    // === Accessors ===

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn live_count(&self) -> usize { self.grid.live_count() }

    /// Current generation, row-major. Re-fetch after every `tick` or toggle.
    pub fn cells(&self) -> &[Cell] { self.grid.cells() }

    /// Copy of the current generation as bytes (0 = dead, 1 = alive).
    pub fn cells_snapshot(&self) -> Vec<u8> { self.grid.cells_bytes() }

    /// Get pointer to the cell buffer (for JS rendering)
    pub fn cells_ptr(&self) -> *const Cell { self.grid.cells_ptr() }

    pub fn cells_len(&self) -> usize { self.grid.size() }

    pub fn get(&self, row: u32, col: u32) -> Result<Cell, EngineError> {
        self.grid.get(row, col)
    }

    /// Live neighbors of an in-bounds cell, wrapping at the edges.
    pub fn live_neighbor_count(&self, row: u32, col: u32) -> Result<u8, EngineError> {
        self.grid.live_neighbor_count(row, col)
    }

    pub fn index(&self, row: u32, col: u32) -> Result<usize, EngineError> {
        self.grid.checked_index(row, col)
    }

    pub fn coords(&self, idx: usize) -> Option<(u32, u32)> {
        (idx < self.grid.size()).then(|| self.grid.coords(idx))
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    // === Stepping ===

    /// Advance exactly one generation
    pub fn tick(&mut self) {
        tick::tick(self);
    }

    /// Advance `n` generations
    pub fn tick_n(&mut self, n: u32) {
        for _ in 0..n {
            tick::tick(self);
        }
    }

    // === Mutation ===

    /// Flip the cell at `(row, col)`. Out-of-range input leaves the grid unchanged.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<Cell, EngineError> {
        commands::toggle_cell(self, row, col)
    }

    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) -> Result<(), EngineError> {
        commands::set_cell(self, row, col, cell)
    }

    /// Mark every listed cell alive. All-or-nothing on invalid coordinates.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) -> Result<(), EngineError> {
        commands::set_cells(self, cells)
    }

    /// Kill every cell and restart the generation count
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Restore generation 0
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    // === Settings ===

    /// Enable or disable per-tick perf metrics (adds a births/deaths pass when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn perf_metrics_enabled(&self) -> bool {
        settings::perf_metrics_enabled(self)
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Rendering ===

    /// Text rendering: one line per row, no trailing newline
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// 64x64 with the classic modulo seed
impl Default for UniverseCore {
    fn default() -> Self {
        init::create_default_universe_core()
    }
}

impl fmt::Display for UniverseCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_text::write_grid(&self.grid, f)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
