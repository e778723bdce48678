use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::probe::ProbeConfig;

/// Top-level configuration, loadable from a TOML file with every field
/// optional. CLI flags are merged on top via [`CliOverrides`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub probe: ProbeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub workers: Option<usize>,
    pub nameserver: Option<String>,
    pub add_default_subdomains: bool,
    pub log_level: Option<String>,
}

impl Config {
    /// Load the file at `path` (or defaults when `None`), then apply the
    /// CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                        path: path.to_string(),
                        source,
                    })?;
                Self::from_toml_str(&contents)?
            }
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(workers) = overrides.workers {
            self.probe.workers = workers;
        }
        if let Some(nameserver) = overrides.nameserver {
            self.probe.nameserver = Some(nameserver);
        }
        if overrides.add_default_subdomains {
            self.probe.add_default_subdomains = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe.workers == 0 {
            return Err(ConfigError::Invalid(
                "probe.workers must be at least 1".to_string(),
            ));
        }
        if self.probe.lookup_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "probe.lookup_timeout_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
