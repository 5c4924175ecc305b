//! Library configuration
//!
//! Settings can come from YAML (either flat or nested under a `basis:` key)
//! or from `BASIS_*` environment variables.

use crate::error::{BasisError, ErrorCode, ErrorExt, Result};
use crate::random::{SeededSource, ThreadSource, UniformSource};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::str::FromStr;
use std::time::Duration;

/// Default wait used by `Debounced::from_config`
pub const DEFAULT_WAIT_MS: u64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomSettings {
    /// Seed for reproducible draws; `None` uses the thread-local generator
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceSettings {
    pub default_wait_ms: u64,
}

impl Default for DebounceSettings {
    fn default() -> Self {
        Self {
            default_wait_ms: DEFAULT_WAIT_MS,
        }
    }
}

/// Configuration for the basis utilities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasisConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    pub random: RandomSettings,
    pub debounce: DebounceSettings,
}

impl BasisConfig {
    /// Read `BASIS_VERBOSE`, `BASIS_RANDOM_SEED` and `BASIS_DEBOUNCE_WAIT_MS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (for tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(verbose) = read_var(&lookup, "BASIS_VERBOSE", "0-255")? {
            config.verbose = verbose;
        }
        if let Some(seed) = read_var(&lookup, "BASIS_RANDOM_SEED", "an integer")? {
            config.random.seed = Some(seed);
        }
        if let Some(wait) = read_var(&lookup, "BASIS_DEBOUNCE_WAIT_MS", "milliseconds")? {
            config.debounce.default_wait_ms = wait;
        }
        Ok(config)
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random.seed = Some(seed);
        self
    }

    pub fn with_default_wait(mut self, wait: Duration) -> Self {
        self.debounce.default_wait_ms = wait.as_millis() as u64;
        self
    }

    pub fn default_wait(&self) -> Duration {
        Duration::from_millis(self.debounce.default_wait_ms)
    }

    /// Source for `random_with`/`shuffle_with`: seeded when a seed is configured
    pub fn random_source(&self) -> Box<dyn UniformSource> {
        match self.random.seed {
            Some(seed) => Box::new(SeededSource::new(seed)),
            None => Box::new(ThreadSource),
        }
    }

    /// Get the log filter based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn read_var<T, F>(lookup: &F, key: &str, expected: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .to_config_error(format!("{} must be {}", key, expected))
        .map_err(|e| e.with_context(format!("got '{}'", raw)))
}

/// Parse YAML content into a BasisConfig
///
/// # Errors
///
/// Fails with a configuration error carrying the underlying YAML problem as
/// its source.
pub fn parse_config(content: &str) -> Result<BasisConfig> {
    parse_document(content).map_err(|e| {
        BasisError::config_with_code(
            ErrorCode::CONFIG_INVALID_YAML,
            "Failed to parse basis configuration",
        )
        .with_source(e)
    })
}

fn parse_document(content: &str) -> anyhow::Result<BasisConfig> {
    let full: Value = serde_yaml::from_str(content).context("invalid YAML syntax")?;
    if full.is_null() {
        return Ok(BasisConfig::default());
    }

    // A document with a `basis` section takes that section
    if let Some(section) = full.get("basis") {
        return serde_yaml::from_value(section.clone()).context("invalid `basis` section");
    }
    serde_yaml::from_value(full).context("invalid configuration document")
}
