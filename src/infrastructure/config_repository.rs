use crate::domain::entities::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigRepository {
    config_path: PathBuf,
}

impl ConfigRepository {
    pub fn new() -> Self {
        let config_dir = if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".config").join("addin-installer")
        } else {
            PathBuf::from(".")
        };

        Self::with_path(config_dir.join("config.json"))
    }

    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file {}", self.config_path.display()))?;

        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", self.config_path.display()))?;

        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(config)
            .context("Failed to serialize config")?;

        fs::write(&self.config_path, content)
            .context("Failed to write config file")?;

        Ok(())
    }
}

impl Default for ConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}
