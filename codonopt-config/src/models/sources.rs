use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub optimization: FileOptimizationConfig,
    #[serde(default)]
    pub solver: FileSolverConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileOptimizationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_window: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genetic_code: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSolverConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomization_threshold: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_random_iters: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutations_per_iteration: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub species: Option<String>,
    pub avoid_pattern: Option<String>,
    pub gc_min: Option<f64>,
    pub gc_max: Option<f64>,
    pub gc_window: Option<usize>,
    pub seed: Option<u64>,
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            config_path: non_empty(lookup("CODONOPT_CONFIG")).map(PathBuf::from),
            server_host: non_empty(lookup("SERVER_HOST")),
            server_port: parse_var(&lookup, "SERVER_PORT"),
            species: non_empty(lookup("CODONOPT_SPECIES")),
            avoid_pattern: non_empty(lookup("CODONOPT_AVOID_PATTERN")),
            gc_min: parse_var(&lookup, "CODONOPT_GC_MIN"),
            gc_max: parse_var(&lookup, "CODONOPT_GC_MAX"),
            gc_window: parse_var(&lookup, "CODONOPT_GC_WINDOW"),
            seed: parse_var(&lookup, "CODONOPT_SEED"),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_csv(&raw)),
        }
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(name).and_then(|raw| raw.trim().parse().ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn parses_known_variables() {
        let env = env(&[
            ("SERVER_PORT", "9001"),
            ("CODONOPT_SPECIES", "h_sapiens"),
            ("CODONOPT_GC_MIN", "0.25"),
            ("CODONOPT_GC_WINDOW", "100"),
            ("CODONOPT_SEED", "7"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
        ]);
        assert_eq!(env.server_port, Some(9001));
        assert_eq!(env.species.as_deref(), Some("h_sapiens"));
        assert_eq!(env.gc_min, Some(0.25));
        assert_eq!(env.gc_window, Some(100));
        assert_eq!(env.seed, Some(7));
        assert_eq!(
            env.cors_allowed_origins,
            Some(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }

    #[test]
    fn unparsable_and_blank_values_are_ignored() {
        let env = env(&[
            ("SERVER_PORT", "eighty"),
            ("SERVER_HOST", "  "),
            ("CODONOPT_GC_MAX", "high"),
        ]);
        assert_eq!(env.server_port, None);
        assert_eq!(env.server_host, None);
        assert_eq!(env.gc_max, None);
    }

    #[test]
    fn file_config_rejects_unknown_sections() {
        let result = toml::from_str::<FileConfig>("[database]\nurl = \"x\"\n");
        assert!(result.is_err());

        let file: FileConfig =
            toml::from_str("[solver]\nseed = 3\n").expect("valid toml");
        assert_eq!(file.solver.seed, Some(3));
        assert!(file.server.port.is_none());
    }
}
