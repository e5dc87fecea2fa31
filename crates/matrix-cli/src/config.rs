//! Configuration for the matrix CLI.
//!
//! Settings come from an optional TOML file, then environment variables
//! override individual keys:
//!
//! - `MATRIX_CLI_LOG`          (default: "warn")
//! - `MATRIX_CLI_STRICT_MAGIC` (default: "false")
//!
//! Example file:
//!
//! ```toml
//! log_filter = "matrix_cli=debug"
//! strict_magic = true
//! ```

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const ENV_LOG: &str = "MATRIX_CLI_LOG";
pub const ENV_STRICT_MAGIC: &str = "MATRIX_CLI_STRICT_MAGIC";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,

    /// Refuse to decode blobs whose first word is not the gonum magic.
    pub strict_magic: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            strict_magic: false,
        }
    }
}

impl CliConfig {
    /// Load from `path` (if given), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(p) => {
                let text = fs::read_to_string(p)
                    .with_context(|| format!("reading config {}", p.display()))?;
                Self::from_toml_str(&text)
                    .with_context(|| format!("parsing config {}", p.display()))?
            }
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Replace fields whose environment variable is set.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Replace fields for which `lookup` returns a value.
    ///
    /// `lookup` maps a variable name (`ENV_LOG`, `ENV_STRICT_MAGIC`) to
    /// its raw value.
    pub fn with_overrides<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            log_filter: read_var_or_default(&lookup, ENV_LOG, self.log_filter)?,
            strict_magic: read_var_or_default(&lookup, ENV_STRICT_MAGIC, self.strict_magic)?,
        })
    }
}

fn read_var_or_default<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val
            .parse::<T>()
            .with_context(|| format!("invalid value {:?} for {}", val, key)),
        None => Ok(default),
    }
}
