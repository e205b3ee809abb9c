use std::{fmt, sync::Arc};

use anyhow::Context;
use codonopt_config::Config;
use codonopt_contracts::SequenceEngine;
use codonopt_core::{ChiselEngine, CodonOptimizationService};

/// Shared, read-only server context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub optimizer: Arc<CodonOptimizationService>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Build the production state: a [`ChiselEngine`] configured from
    /// `config`.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let engine =
            ChiselEngine::new(&config.optimization_spec(), config.solver_settings())
                .context("failed to initialise optimization engine")?;
        Ok(Self::with_engine(config, Arc::new(engine)))
    }

    /// Build with any engine, e.g. a mock in tests.
    pub fn with_engine(config: Config, engine: Arc<dyn SequenceEngine>) -> Self {
        let optimizer =
            CodonOptimizationService::new(engine, config.rng_source());
        Self {
            config: Arc::new(config),
            optimizer: Arc::new(optimizer),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn optimizer(&self) -> &Arc<CodonOptimizationService> {
        &self.optimizer
    }
}
