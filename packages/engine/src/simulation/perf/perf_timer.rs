//! Wall-clock timer for perf metrics: `Date.now()` in the browser,
//! `Instant` on native targets.

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

#[cfg(target_arch = "wasm32")]
impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start_ms: js_sys::Date::now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (js_sys::Date::now() - self.start_ms).max(0.0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start: std::time::Instant::now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}
