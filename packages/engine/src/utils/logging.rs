//! Console logging
//!
//! On wasm32 messages go straight to the browser console through `web_sys`.
//! Everywhere else they are forwarded to the `log` facade, so native hosts and
//! tests pick whatever logger they install (or none).

/// Informational message (`console.log` / `log::info!`).
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            log::info!($($arg)*);
        }
    }};
}

/// Diagnostic message (`console.debug` / `log::debug!`).
macro_rules! console_debug {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::debug_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            log::debug!($($arg)*);
        }
    }};
}
