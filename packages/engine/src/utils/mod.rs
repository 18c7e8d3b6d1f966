//! Crate-wide helpers: indexing macros for the tick hot loop, console logging
//! and the browser panic hook.

#[macro_use]
mod safety;
#[macro_use]
mod logging;

/// Route Rust panics to `console.error` so they show up in browser devtools.
///
/// Safe to call more than once; only the first call installs the hook.
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// No-op when the `console_error_panic_hook` feature is disabled.
#[cfg(not(feature = "console_error_panic_hook"))]
pub fn set_panic_hook() {}
