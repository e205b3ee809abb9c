pub mod sources;

use std::path::PathBuf;

use codonopt_contracts::{GcWindow, OptimizationSpec};
use codonopt_core::{RngSource, SolverSettings};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub optimization: OptimizationConfig,
    pub solver: SolverConfig,
    pub cors: CorsConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// `host:port` the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn optimization_spec(&self) -> OptimizationSpec {
        let opt = &self.optimization;
        OptimizationSpec {
            avoid_pattern: opt.avoid_pattern.clone(),
            gc: GcWindow {
                min: opt.gc_min,
                max: opt.gc_max,
                window: opt.gc_window,
            },
            species: opt.species.clone(),
            genetic_code: opt.genetic_code.clone(),
        }
    }

    pub fn solver_settings(&self) -> SolverSettings {
        SolverSettings {
            randomization_threshold: self.solver.randomization_threshold,
            max_random_iters: self.solver.max_random_iters,
            mutations_per_iteration: self.solver.mutations_per_iteration,
        }
    }

    pub fn rng_source(&self) -> RngSource {
        RngSource::from(self.solver.seed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Constraint and objective parameters applied to every sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationConfig {
    pub species: String,
    pub avoid_pattern: String,
    pub gc_min: f64,
    pub gc_max: f64,
    pub gc_window: usize,
    pub genetic_code: String,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        let spec = OptimizationSpec::default();
        Self {
            species: spec.species,
            avoid_pattern: spec.avoid_pattern,
            gc_min: spec.gc.min,
            gc_max: spec.gc.max,
            gc_window: spec.gc.window,
            genetic_code: spec.genetic_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub randomization_threshold: u64,
    pub max_random_iters: usize,
    pub mutations_per_iteration: usize,
    /// Fixed seed for every batch. `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        let settings = SolverSettings::default();
        Self {
            randomization_threshold: settings.randomization_threshold,
            max_random_iters: settings.max_random_iters,
            mutations_per_iteration: settings.mutations_per_iteration,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
