use codonopt_contracts::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Search budget for constraint resolution and optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Local searches with at most this many codon combinations are
    /// exhaustive; larger ones fall back to random search.
    pub randomization_threshold: u64,
    pub max_random_iters: usize,
    pub mutations_per_iteration: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            randomization_threshold: 10_000,
            max_random_iters: 1_000,
            mutations_per_iteration: 2,
        }
    }
}

impl SolverSettings {
    pub fn validate(&self) -> EngineResult<()> {
        if self.mutations_per_iteration == 0 {
            return Err(EngineError::InvalidSettings(
                "mutations_per_iteration must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
