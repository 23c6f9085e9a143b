use super::{parse_duration, ConfigError, LoggingConfig, ScanConfig, ScanSettings};
use crate::{ResolverPool, ServiceSignature};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration, loaded from an optional TOML file and then
/// overridden by command-line flags.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line. `None`/empty means "keep the file or
/// default value".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub concurrency: Option<usize>,
    pub timeout: Option<String>,
    pub retries: Option<u32>,
    pub verbose: bool,
    pub resolvers: Vec<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the config file (when given), then applies CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(Path::new(p))?,
            None => Self::default(),
        };
        config.apply_overrides(overrides)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
        if let Some(concurrency) = overrides.concurrency {
            self.scan.concurrency = concurrency;
        }
        if let Some(timeout) = overrides.timeout {
            let millis = parse_duration(&timeout)?.as_millis();
            self.scan.timeout_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        }
        if let Some(retries) = overrides.retries {
            self.scan.retries = retries;
        }
        if overrides.verbose {
            self.scan.verbose = true;
        }
        if !overrides.resolvers.is_empty() {
            self.scan.resolvers = overrides.resolvers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.concurrency == 0 {
            return Err(ConfigError::Validation(
                "concurrency must be greater than 0".into(),
            ));
        }
        if self.scan.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "timeout must be greater than 0".into(),
            ));
        }
        ResolverPool::new(&self.scan.resolvers)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        for signature in &self.scan.extra_signatures {
            if signature.pattern.trim().is_empty() || signature.service.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "takeover signatures need a non-empty pattern and service".into(),
                ));
            }
        }
        if !matches!(
            self.logging.level.to_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Freezes the settings into the value shared by the pipeline.
    /// Call after `validate()`.
    pub fn scan_config(&self) -> Result<ScanConfig, ConfigError> {
        let resolvers = ResolverPool::new(&self.scan.resolvers)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        Ok(ScanConfig {
            concurrency: self.scan.concurrency,
            timeout: Duration::from_millis(self.scan.timeout_ms),
            retries: self.scan.retries,
            verbose: self.scan.verbose,
            resolvers,
        })
    }

    /// Built-in signatures followed by user-supplied ones. Extra patterns
    /// are lowercased so they compare against lowercased targets.
    pub fn signatures(&self) -> Vec<ServiceSignature> {
        let mut signatures = ServiceSignature::defaults();
        signatures.extend(self.scan.extra_signatures.iter().map(|s| {
            ServiceSignature::new(s.pattern.trim().to_lowercase(), s.service.trim())
        }));
        signatures
    }
}
