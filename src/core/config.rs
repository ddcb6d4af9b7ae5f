//! Application configuration management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::store::StoreConfig;
use super::youtube_api::YoutubeApiConfig;
use crate::utils::validation::validate_url;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Main application configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSection,
    pub youtube: YoutubeApiConfig,
    pub store: StoreConfig,
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSection {
    /// Shown in page titles
    pub app_name: String,
    pub log_level: String, // "error", "warn", "info", "debug", "trace"
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection::default(),
            youtube: YoutubeApiConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            app_name: "Video Album".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file, creating default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

            let config: AppConfig =
                serde_json::from_str(&content).with_context(|| "Failed to parse config file")?;

            tracing::info!("Loaded configuration from: {:?}", config_path);
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            tracing::info!("Created default configuration at: {:?}", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        tracing::info!("Saved configuration to: {:?}", config_path);
        Ok(())
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "videoalbum", "album")
            .with_context(|| "Failed to get project directories")?;

        let config_dir = project_dirs.config_dir();
        Ok(config_dir.join("config.json"))
    }

    /// Defaults overridden by environment variables (`YOUTUBE_API_KEY`, `FIREBASE_PROJECT_ID`, ...)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`AppConfig::from_env`], reading variables through `lookup`
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(name) = var("APP_NAME") {
            config.app.app_name = name;
        }
        if let Some(level) = var("APP_LOG_LEVEL") {
            config.app.log_level = level.to_lowercase();
        }

        if let Some(base_url) = var("YOUTUBE_API_BASE_URL") {
            config.youtube.base_url = base_url;
        }
        if let Some(timeout) = var("YOUTUBE_API_TIMEOUT").and_then(|t| t.parse().ok()) {
            config.youtube.timeout_seconds = timeout;
        }

        config.apply_overrides(&lookup);
        config
    }

    /// Overlay the API key and store settings found in the environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Like [`AppConfig::apply_env_overrides`], reading variables through `lookup`.
    /// Fields whose variable is unset or blank keep their current value.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let overlay = |field: &mut Option<String>, key: &str| {
            if let Some(value) = var(key) {
                *field = Some(value);
            }
        };

        if let Some(key) = var("YOUTUBE_API_KEY") {
            self.youtube.api_key = key;
        }

        let store = &mut self.store;
        overlay(&mut store.api_key, "FIREBASE_API_KEY");
        overlay(&mut store.auth_domain, "FIREBASE_AUTH_DOMAIN");
        overlay(&mut store.project_id, "FIREBASE_PROJECT_ID");
        overlay(&mut store.storage_bucket, "FIREBASE_STORAGE_BUCKET");
        overlay(&mut store.messaging_sender_id, "FIREBASE_MESSAGING_SENDER_ID");
        overlay(&mut store.app_id, "FIREBASE_APP_ID");
        overlay(&mut store.measurement_id, "FIREBASE_MEASUREMENT_ID");
        if let Some(collection) = var("FIREBASE_VIDEOS_COLLECTION") {
            store.videos_collection = collection;
        }
    }

    /// Export configuration as JSON string
    pub fn export(&self) -> Result<String> {
        serde_json::to_string_pretty(self).with_context(|| "Failed to export configuration")
    }

    /// Import configuration from JSON string
    pub fn import(json: &str) -> Result<Self> {
        let config: AppConfig =
            serde_json::from_str(json).with_context(|| "Failed to parse imported configuration")?;

        // Validate before handing it out
        config
            .validate()
            .with_context(|| "Imported configuration is invalid")?;

        tracing::info!("Imported and validated configuration from JSON");
        Ok(config)
    }

    /// Get configuration as environment variables (for debugging); secrets are masked
    pub fn to_env_vars(&self) -> HashMap<String, String> {
        let mut env_vars = HashMap::new();

        env_vars.insert("APP_NAME".to_string(), self.app.app_name.clone());
        env_vars.insert("APP_LOG_LEVEL".to_string(), self.app.log_level.clone());
        env_vars.insert(
            "YOUTUBE_API_BASE_URL".to_string(),
            self.youtube.base_url.clone(),
        );
        env_vars.insert(
            "YOUTUBE_API_TIMEOUT".to_string(),
            self.youtube.timeout_seconds.to_string(),
        );
        if !self.youtube.api_key.is_empty() {
            env_vars.insert("YOUTUBE_API_KEY".to_string(), "***".to_string());
        }

        if let Some(ref project_id) = self.store.project_id {
            env_vars.insert("FIREBASE_PROJECT_ID".to_string(), project_id.clone());
        }
        env_vars.insert(
            "FIREBASE_VIDEOS_COLLECTION".to_string(),
            self.store.videos_collection.clone(),
        );

        env_vars
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.app.app_name.trim().is_empty() {
            anyhow::bail!("Application name must not be empty");
        }

        if !LOG_LEVELS.contains(&self.app.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level: must be 'error', 'warn', 'info', 'debug', or 'trace'"
            );
        }

        validate_url(&self.youtube.base_url)
            .with_context(|| "Invalid YouTube API base URL")?;

        if self.youtube.timeout_seconds == 0 || self.youtube.timeout_seconds > 300 {
            anyhow::bail!("Timeout should be between 1 and 300 seconds");
        }

        if self.store.videos_collection.trim_matches('/').is_empty() {
            anyhow::bail!("Videos collection name must not be empty");
        }

        if self.store.api_key.is_some() && self.store.project_id.is_none() {
            anyhow::bail!("Store project id must be specified when an API key is set");
        }

        Ok(())
    }

    /// Whether a YouTube API key is available
    pub fn has_api_key(&self) -> bool {
        !self.youtube.api_key.trim().is_empty()
    }
}
