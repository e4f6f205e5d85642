//! Configuration loading for the `stack-params` CLI.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag, must exist)
//! 2. `./stack-params.toml` (project)
//! 3. `~/.config/stack-params/config.toml` (user)
//!
//! When no file is found the defaults apply.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Result, StackParamsError};

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "stack-params.toml";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the deployment context is read from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextConfig {
    /// `cdk.json`-style file holding a `context` object (default: cdk.json).
    #[serde(default = "default_context_file")]
    pub file: PathBuf,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            file: default_context_file(),
        }
    }
}

fn default_context_file() -> PathBuf {
    PathBuf::from("cdk.json")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandingConfig {
    /// Branding JSON file (default: branding.json). Missing file means no branding.
    #[serde(default = "default_branding_file")]
    pub file: PathBuf,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            file: default_branding_file(),
        }
    }
}

fn default_branding_file() -> PathBuf {
    PathBuf::from("branding.json")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print the resolved JSON (default: true).
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; error if missing)
    /// 2. `./stack-params.toml`
    /// 3. `~/.config/stack-params/config.toml`
    /// 4. Defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse a single config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StackParamsError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        let config = toml::from_str(&content).map_err(|e| {
            StackParamsError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })?;
        debug!(?path, "config loaded");
        Ok(config)
    }

    /// Resolve the config file path.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(StackParamsError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        let project_config = PathBuf::from(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            return Ok(Some(project_config));
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("stack-params").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        Ok(None)
    }
}
