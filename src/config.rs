use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Configuration for plandoc
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub generation: GenerationConfig,
    pub reference: ReferenceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub model: String,
    /// Base URL of an OpenAI-compatible API; `OPENAI_API_BASE` overrides it
    pub base_url: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub market_max_tokens: u32,
    pub competitive_max_tokens: u32,
    pub financial_max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Characters of reference content kept in previews
    pub preview_chars: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4-turbo-preview".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.7,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            market_max_tokens: 2000,
            competitive_max_tokens: 2000,
            financial_max_tokens: 2500,
        }
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self { preview_chars: 500 }
    }
}

impl Config {
    /// Load config from the config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Save config to the config directory, returning where it was written
    pub fn save(&self) -> Result<Option<PathBuf>> {
        let Some(config_path) = Self::get_config_path() else {
            return Ok(None);
        };
        self.save_to(&config_path)?;
        Ok(Some(config_path))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("plandoc").join("config.toml"))
    }

    /// Backend base URL after applying the environment override
    pub fn base_url(&self) -> String {
        std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| self.backend.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[backend]
model = "gpt-4o-mini"

[reference]
preview_chars = 200
"#,
        )
        .unwrap();

        assert_eq!(config.backend.model, "gpt-4o-mini");
        assert_eq!(config.backend.temperature, 0.7);
        assert_eq!(config.generation.financial_max_tokens, 2500);
        assert_eq!(config.reference.preview_chars, 200);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.generation.market_max_tokens = 1200;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "backend = 3").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
