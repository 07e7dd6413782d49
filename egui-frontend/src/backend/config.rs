//! # Advice Configuration
//!
//! Settings for the advice provider, layered from lowest to highest priority:
//!
//! 1. built-in defaults
//! 2. optional YAML file (`pawsome_config.yaml` in the platform config
//!    directory, or the path in `PAWSOME_CONFIG`)
//! 3. environment (`API_KEY` / `GEMINI_API_KEY`, `PAWSOME_MODEL`,
//!    `PAWSOME_API_BASE`)
//!
//! ## YAML Format
//!
//! ```yaml
//! model: "gemini-3-flash-preview"
//! api_base: "https://generativelanguage.googleapis.com"
//! timeout_secs: 30
//! ```
//!
//! A missing API key is not an error: every advice call then falls back.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const CONFIG_FILE_NAME: &str = "pawsome_config.yaml";
const APP_DIR_NAME: &str = "pawsome-care";

/// On-disk configuration, every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolved advice provider settings
#[derive(Clone, PartialEq)]
pub struct AdviceConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    /// Local request timeout; None leaves it to the HTTP client
    pub timeout_secs: Option<u64>,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: None,
        }
    }
}

// Hand-written so the key never reaches the logs
impl fmt::Debug for AdviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdviceConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AdviceConfig {
    /// Load configuration from the config file and process environment
    pub fn load() -> Self {
        let env = |key: &str| std::env::var(key).ok();

        let file = match Self::config_path(env) {
            Some(path) => match Self::read_config_file(&path) {
                Ok(file) => file,
                Err(e) => {
                    warn!("Ignoring config file {}: {:#}", path.display(), e);
                    None
                }
            },
            None => None,
        };

        let config = Self::resolve(file, env);
        info!(
            "Advice provider: model={}, api_base={}, api key {}",
            config.model,
            config.api_base,
            if config.api_key.is_some() { "present" } else { "missing" }
        );
        config
    }

    /// Location of the YAML config file, if one can be determined
    pub fn config_path(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        if let Some(explicit) = non_empty(env("PAWSOME_CONFIG")) {
            return Some(PathBuf::from(explicit));
        }
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read the YAML config file. A missing file yields `Ok(None)`.
    pub fn read_config_file(path: &Path) -> Result<Option<ConfigFile>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        info!("Loaded config file {}", path.display());
        Ok(Some(file))
    }

    /// Layer defaults, file values and environment values
    pub fn resolve(file: Option<ConfigFile>, env: impl Fn(&str) -> Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let api_key = non_empty(env("API_KEY"))
            .or_else(|| non_empty(env("GEMINI_API_KEY")))
            .or_else(|| non_empty(file.api_key));

        let model = non_empty(env("PAWSOME_MODEL"))
            .or_else(|| non_empty(file.model))
            .unwrap_or(defaults.model);

        let api_base = non_empty(env("PAWSOME_API_BASE"))
            .or_else(|| non_empty(file.api_base))
            .unwrap_or(defaults.api_base);

        Self {
            api_key,
            model,
            api_base: api_base.trim_end_matches('/').to_string(),
            timeout_secs: file.timeout_secs,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
