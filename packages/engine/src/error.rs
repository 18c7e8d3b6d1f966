//! Engine errors
//!
//! Everything that can go wrong is input validation at construction or
//! mutation time; ticking and reading never fail.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Zero width/height, or more cells than the target can address.
    #[error("invalid dimensions {width}x{height}: both must be positive and width*height addressable")]
    InvalidDimensions { width: u32, height: u32 },

    /// A `(row, col)` outside the grid. The grid is left unchanged.
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    IndexOutOfRange {
        row: u32,
        col: u32,
        height: u32,
        width: u32,
    },

    /// Malformed config JSON or seed parameters.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
