//! Zero-cost indexing for the generation scan
//!
//! The neighbor count reads eight cells for every cell of the grid, so the
//! bounds checks on those reads show up in profiles. Indices there are always
//! produced by the wrap arithmetic in `spatial::grid`, which keeps them below
//! `width * height`.
//!
//! - Debug: plain indexing, panics with the usual message on a bad index
//! - Release: `get_unchecked` / `get_unchecked_mut`
//!
//! ```ignore
//! let cells = vec![Cell::Dead, Cell::Alive];
//! let alive = *fast!(cells, [1]);
//! fast!(next, [0] = alive);
//! ```

/// Slice access that is bounds-checked only with `debug_assertions`.
///
/// - `fast!(slice, [index])` yields `&T`
/// - `fast!(slice, [index] = value)` writes in place
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            // SAFETY: coordinates are checked or iterated in range, and wrapping keeps the index below the length.
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            // SAFETY: coordinates are checked or iterated in range, and wrapping keeps the index below the length.
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
