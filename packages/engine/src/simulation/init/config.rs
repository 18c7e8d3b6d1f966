//! Universe configuration
//!
//! ```json
//! { "width": 64, "height": 64, "seed": { "kind": "modulo", "a": 2, "b": 7 }, "perf_metrics": false }
//! ```
//!
//! Every field is optional and falls back to the default universe.

use serde::{Deserialize, Serialize};

use crate::domain::seed::SeedPattern;
use crate::error::EngineError;

use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UniverseConfig {
    pub width: u32,
    pub height: u32,
    pub seed: SeedPattern,
    pub perf_metrics: bool,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: SeedPattern::default(),
            perf_metrics: false,
        }
    }
}

impl UniverseConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: UniverseConfig =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.seed.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(|e| EngineError::InvalidConfig(e.to_string()))
    }
}
