//! Genba configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main Genba configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Knowledge file used when `--knowledge` is not given
    #[serde(rename = "knowledge-path")]
    pub knowledge_path: PathBuf,

    /// Template location and naming
    pub templates: TemplatesConfig,

    /// Project selection policy
    pub selection: SelectionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            knowledge_path: PathBuf::from(crate::DEFAULT_KNOWLEDGE_FILE),
            templates: TemplatesConfig::default(),
            selection: SelectionConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .genba.yml
        let local_config = PathBuf::from(".genba.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/genba/genba.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("genba").join("genba.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Template location and file naming
///
/// Template files are named `{assistant}_prompt.{output-ext}.{engine-ext}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory holding the shipped templates
    pub dir: PathBuf,

    /// Directory checked first for user overrides
    #[serde(rename = "override-dir")]
    pub override_dir: PathBuf,

    /// Extension of the rendered output format
    #[serde(rename = "output-ext")]
    pub output_ext: String,

    /// Extension of the template engine
    #[serde(rename = "engine-ext")]
    pub engine_ext: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("templates"),
            override_dir: PathBuf::from(".genba/templates"),
            output_ext: "md".to_string(),
            engine_ext: "hbs".to_string(),
        }
    }
}

/// Project selection policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Fail instead of falling back to the first project on an unknown name
    pub strict: bool,
}
