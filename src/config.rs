//! Configuration management
//!
//! Selects the active rule set and where the student database lives.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classifier::RuleSet;
use crate::store::StoreConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Classification settings
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Database settings
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// "reasons" or "conjunctive"
    #[serde(default)]
    pub rule_set: RuleSet,
}

impl Config {
    /// Load configuration from the default location, writing defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load configuration from a specific file, writing defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent()
            .context("Config path has no parent")?;

        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "dropout-predictor", "dropout-predictor")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

/// Get the data directory path
pub fn data_dir() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "dropout-predictor", "dropout-predictor")
        .context("Failed to get project directories")?;
    Ok(base.data_dir().to_path_buf())
}

/// Print the effective configuration
pub fn show_config(config: &Config, path: &Path) {
    println!("Configuration ({})", path.display());
    println!("==================");
    println!("  Rule set:       {}", config.classifier.rule_set);
    println!("  Database:       {}", config.store.database_path.display());
    println!("  Busy timeout:   {} ms", config.store.busy_timeout_ms);
    println!("  WAL journaling: {}", if config.store.wal { "enabled" } else { "disabled" });
    println!();
    println!("Available rule sets: reasons, conjunctive");
}

/// Set the active rule set in the file at `path`
pub fn set_rule_set(path: &Path, rule_set: RuleSet) -> Result<()> {
    let mut config = Config::load_from(path)?;
    config.classifier.rule_set = rule_set;
    config.save_to(path)?;
    println!("Rule set set to: {}", rule_set);
    Ok(())
}

/// Reset the file at `path` to defaults
pub fn reset_config(path: &Path) -> Result<()> {
    Config::default().save_to(path)?;
    println!("Configuration reset to defaults.");
    Ok(())
}
