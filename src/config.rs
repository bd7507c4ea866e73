use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// File read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG: &str = "almanac.toml";

/// Top-level almanac configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Defaults for engine options.
    #[serde(default)]
    pub defaults: DefaultsToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsToml {
    #[serde(default = "default_overflow")]
    pub overflow: String,
    #[serde(default = "default_rounding_mode")]
    pub rounding_mode: String,
    #[serde(default = "default_difference_mode")]
    pub difference_mode: String,
    #[serde(default)]
    pub relative_to: Option<String>,
}

impl Default for DefaultsToml {
    fn default() -> Self {
        Self {
            overflow: default_overflow(),
            rounding_mode: default_rounding_mode(),
            difference_mode: default_difference_mode(),
            relative_to: None,
        }
    }
}

fn default_overflow() -> String {
    "constrain".to_string()
}
fn default_rounding_mode() -> String {
    "halfExpand".to_string()
}
fn default_difference_mode() -> String {
    "trunc".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub json: bool,
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG`] in the
/// working directory is read if present, otherwise every field takes its
/// default.
pub fn load(path: Option<&Path>) -> Result<AlmanacConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG);
            if !fallback.is_file() {
                debug!("no config file, using defaults");
                return Ok(AlmanacConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: AlmanacConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
