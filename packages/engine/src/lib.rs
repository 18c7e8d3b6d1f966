//! Conway Engine - toroidal Game of Life in WASM
//!
//! The engine owns the automaton; the JS host owns the frame loop, the
//! canvas and the pointer events. Per frame the host calls `tick()` and then
//! reads the cell buffer through `cells_ptr()`.
//!
//! Architecture:
//! - utils/       - hot-loop indexing macro, console logging, panic hook
//! - domain/      - cell state, B3/S23 rule, seed patterns
//! - spatial/     - grid storage, indexing, toroidal neighbor counting
//! - simulation/  - universe orchestration and the wasm facade

// Macros must be declared before the modules that use them
#[macro_use]
mod utils;
pub mod domain;
pub mod error;
pub mod spatial;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Smaller allocator for the wasm binary
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Thread pool initialization for threaded wasm builds
#[cfg(all(feature = "threads", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

pub use utils::set_panic_hook;

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    set_panic_hook();
    console_log!("Conway engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::cell::Cell;
pub use domain::seed::SeedPattern;
pub use error::EngineError;
pub use simulation::{PerfStats, Universe, UniverseConfig, UniverseCore};
pub use spatial::grid::Grid;
