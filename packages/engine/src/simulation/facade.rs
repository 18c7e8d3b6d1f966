use wasm_bindgen::prelude::*;

use crate::domain::cell::Cell;
use crate::domain::seed::SeedPattern;

use super::perf_stats::PerfStats;
use super::UniverseCore;

/// JS handle to one universe.
///
/// Rendering contract: `cells_ptr()` points into wasm memory and is only valid
/// until the next `tick`, `tick_n`, `toggle_cell`, `clear` or `reset`. Read
/// `cells_len()` bytes from it once per frame, after ticking.
#[wasm_bindgen]
pub struct Universe {
    core: UniverseCore,
}

#[wasm_bindgen]
impl Universe {
    /// 64x64 universe with the classic modulo seed
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let core = UniverseCore::default();
        console_log!("universe {}x{} ready", core.width(), core.height());
        Self { core }
    }

    /// Default seed at a custom size
    #[wasm_bindgen(js_name = withSize)]
    pub fn with_size(width: u32, height: u32) -> Result<Universe, JsValue> {
        let core = UniverseCore::new(width, height, SeedPattern::default())?;
        Ok(Self { core })
    }

    /// Build from a JSON `UniverseConfig`
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Universe, JsValue> {
        let core = UniverseCore::from_config_json(&json)?;
        console_log!(
            "universe {}x{} loaded from config ({} alive)",
            core.width(),
            core.height(),
            core.live_count()
        );
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn live_count(&self) -> u32 { u32::try_from(self.core.live_count()).unwrap_or(u32::MAX) }

    /// Advance one generation
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Advance `n` generations (fast-forward without rendering in between)
    pub fn tick_n(&mut self, n: u32) {
        self.core.tick_n(n);
    }

    /// Flip one cell; the host clamps click coordinates before calling
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), JsValue> {
        self.core.toggle_cell(row, col)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Text rendering, one row per line
    pub fn render(&self) -> String {
        self.core.render()
    }

    /// Get pointer to the cell buffer (for JS rendering)
    pub fn cells_ptr(&self) -> *const Cell {
        self.core.cells_ptr()
    }

    /// Cell count (one byte per cell)
    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    /// Copy of the cell buffer, for hosts that should not hold a raw view
    pub fn cells_snapshot(&self) -> Vec<u8> {
        self.core.cells_snapshot()
    }

    /// Enable or disable per-tick perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl Universe {
    /// Native access to the wrapped core
    pub fn core(&self) -> &UniverseCore {
        &self.core
    }
}
