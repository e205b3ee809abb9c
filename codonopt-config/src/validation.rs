use codonopt_core::{CodonUsageTable, GeneticCode, SitePattern};
use thiserror::Error;

use crate::models::Config;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("{field} must lie within [0, 1], got {value}")]
    GcBoundOutOfRange { field: &'static str, value: f64 },
    #[error("GC minimum {min} exceeds GC maximum {max}")]
    InvertedGcBounds { min: f64, max: f64 },
    #[error("GC window must be at least 1 base")]
    ZeroGcWindow,
    #[error("solver mutations_per_iteration must be at least 1")]
    ZeroMutations,
    #[error("unknown codon usage table '{0}'")]
    UnknownSpecies(String),
    #[error("unknown genetic code '{0}'")]
    UnknownGeneticCode(String),
    #[error("unknown restriction pattern '{0}'")]
    UnknownPattern(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    let opt = &config.optimization;

    for (field, value) in [("gc_min", opt.gc_min), ("gc_max", opt.gc_max)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigGuardRailError::GcBoundOutOfRange { field, value });
        }
    }
    if opt.gc_min > opt.gc_max {
        return Err(ConfigGuardRailError::InvertedGcBounds {
            min: opt.gc_min,
            max: opt.gc_max,
        });
    }
    if opt.gc_window == 0 {
        return Err(ConfigGuardRailError::ZeroGcWindow);
    }
    if config.solver.mutations_per_iteration == 0 {
        return Err(ConfigGuardRailError::ZeroMutations);
    }

    let code = GeneticCode::by_name(&opt.genetic_code).map_err(|_| {
        ConfigGuardRailError::UnknownGeneticCode(opt.genetic_code.clone())
    })?;
    CodonUsageTable::for_species(&opt.species, &code)
        .map_err(|_| ConfigGuardRailError::UnknownSpecies(opt.species.clone()))?;
    SitePattern::from_spec(&opt.avoid_pattern).map_err(|_| {
        ConfigGuardRailError::UnknownPattern(opt.avoid_pattern.clone())
    })?;

    if config.solver.seed.is_some() {
        warnings.push_with_hint(
            "CODONOPT_SEED is set; every batch reuses the same random seed",
            "Unset the seed in production so identical requests explore different solutions",
        );
    }

    if config.solver.max_random_iters == 0 {
        warnings.push(
            "max_random_iters is 0; random constraint search and the random optimization pass are disabled",
        );
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_without_warnings() {
        let warnings = apply_guard_rails(&Config::default()).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut config = Config::default();
        config.optimization.gc_min = 0.8;
        config.optimization.gc_max = 0.2;
        assert_eq!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::InvertedGcBounds { min: 0.8, max: 0.2 })
        );
    }

    #[test]
    fn bounds_outside_unit_interval_are_rejected() {
        let mut config = Config::default();
        config.optimization.gc_max = 1.5;
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::GcBoundOutOfRange { field: "gc_max", .. })
        ));
    }

    #[test]
    fn zero_window_and_zero_mutations_are_rejected() {
        let mut config = Config::default();
        config.optimization.gc_window = 0;
        assert_eq!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::ZeroGcWindow)
        );

        let mut config = Config::default();
        config.solver.mutations_per_iteration = 0;
        assert_eq!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::ZeroMutations)
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        let mut config = Config::default();
        config.optimization.species = "unicorn".into();
        assert_eq!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::UnknownSpecies("unicorn".into()))
        );

        let mut config = Config::default();
        config.optimization.avoid_pattern = "Foo_site".into();
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::UnknownPattern(_))
        ));
    }

    #[test]
    fn fixed_seed_warns() {
        let mut config = Config::default();
        config.solver.seed = Some(1);
        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings.items[0].hint.is_some());
    }
}
