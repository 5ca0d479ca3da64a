//! Configuration
//!
//! Loaded from an optional TOML file and then overridden from the
//! environment:
//!
//! ```toml
//! max_depth = 512
//! precision = 6
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::expr::eval::MAX_PRECISION;
use crate::expr::parser::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "NUMSENTENCE_CONFIG";
pub const MAX_DEPTH_ENV: &str = "NUMSENTENCE_MAX_DEPTH";
pub const PRECISION_ENV: &str = "NUMSENTENCE_PRECISION";

/// Fractional digits in rendered results
pub const DEFAULT_PRECISION: usize = 6;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum parser recursion depth
    pub max_depth: usize,
    /// Fractional digits when printing a result
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// File named by `NUMSENTENCE_CONFIG` (or defaults), then env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any name -> value lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(MAX_DEPTH_ENV) {
            self.max_depth = parse_usize(MAX_DEPTH_ENV, &value)?;
        }
        if let Some(value) = lookup(PRECISION_ENV) {
            self.precision = parse_usize(PRECISION_ENV, &value)?;
        }
        self.validate()
    }

    /// `max_depth` must lie in `1..=MAX_DEPTH_CEILING` and `precision` in
    /// `0..=MAX_PRECISION`.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_CEILING {
            return Err(ConfigError::InvalidValue {
                name: "max_depth".to_string(),
                value: self.max_depth.to_string(),
            });
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidValue {
                name: "precision".to_string(),
                value: self.precision.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_usize(name: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.precision, 6);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_depth = 64").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.max_depth, 64);
        assert_eq!(config.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_depth = \"deep\"").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [(MAX_DEPTH_ENV, "32"), (PRECISION_ENV, "2")]
            .into_iter()
            .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.max_depth, 32);
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_invalid_override() {
        let mut config = Config::default();
        let result = config.apply_overrides(|name| {
            (name == MAX_DEPTH_ENV).then(|| "lots".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        let result = config.apply_overrides(|name| (name == MAX_DEPTH_ENV).then(|| "0".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        let mut config = Config::default();
        let result = config.apply_overrides(|name| {
            (name == MAX_DEPTH_ENV).then(|| "100000000".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref name, .. }) if name == "max_depth"
        ));

        let mut config = Config::default();
        let result = config.apply_overrides(|name| {
            (name == PRECISION_ENV).then(|| "100000".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref name, .. }) if name == "precision"
        ));
    }

    #[test]
    fn test_limits_accepted_at_bounds() {
        let bounds: HashMap<&str, String> = [
            (MAX_DEPTH_ENV, MAX_DEPTH_CEILING.to_string()),
            (PRECISION_ENV, MAX_PRECISION.to_string()),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|name| bounds.get(name).cloned())
            .unwrap();
        assert_eq!(config.max_depth, MAX_DEPTH_CEILING);
        assert_eq!(config.precision, MAX_PRECISION);
    }

    #[test]
    fn test_from_file_precision_out_of_range() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "precision = 100000").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
