//! Configuration loading for codonopt.
//!
//! Values come from a TOML file, environment variables (optionally seeded
//! from `.env`) and built-in defaults, in that order of increasing
//! precedence for the environment. The resolved [`Config`] is checked by
//! [`validation::apply_guard_rails`] before it is handed out.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    Config, ConfigMetadata, CorsConfig, OptimizationConfig, ServerConfig,
    SolverConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
