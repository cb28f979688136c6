use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skillkit_types::{ScriptKind, TemplateLocale};

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "SKILLKIT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON5 parse error: {0}")]
    Json5(#[from] json5::Error),
    #[error("Config directory not found")]
    NoDirFound,
}

/// Defaults applied by `init-skill` when no flag overrides them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitConfig {
    /// Language of the placeholder text in generated files.
    #[serde(default)]
    pub locale: TemplateLocale,
    /// Language of the example script under `scripts/`.
    #[serde(default)]
    pub script: ScriptKind,
}

/// Top-level skillkit configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillkitConfig {
    #[serde(default)]
    pub init: InitConfig,
}

/// Resolve the skillkit config directory (~/.skillkit/).
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|h| h.join(".skillkit"))
        .ok_or(ConfigError::NoDirFound)
}

/// Resolve the config file path: `$SKILLKIT_CONFIG`, else ~/.skillkit/config.json5.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.json5"))
}

/// Load configuration from the default path, falling back to defaults.
pub fn load_config() -> Result<SkillkitConfig, ConfigError> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let path = config_file_path()?;
    load_config_from(&path)
}

/// Load configuration from a specific path, falling back to defaults if not found.
pub fn load_config_from(path: &Path) -> Result<SkillkitConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("Config file not found at {}, using defaults", path.display());
        return Ok(SkillkitConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: SkillkitConfig = json5::from_str(&content)?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}
