//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::auth::DEFAULT_USERNAME;

/// Database filename used when neither flag nor config names one.
pub const DEFAULT_DB_FILE: &str = "inventory.db";

/// AIT configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the inventory database
    pub database: Option<PathBuf>,

    /// Username offered as the login prompt default
    pub username: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/ait/config.json)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_json::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(db) = std::env::var("AIT_DB") {
            config.database = Some(PathBuf::from(db));
        }
        if let Ok(username) = std::env::var("AIT_USERNAME") {
            config.username = Some(username);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "ait")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.database.is_some() {
            self.database = other.database;
        }
        if other.username.is_some() {
            self.username = other.username;
        }
    }

    /// Resolve the database path: explicit flag, then config, then
    /// `inventory.db` in the current directory.
    pub fn database_path(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        if let Some(ref path) = self.database {
            return path.clone();
        }
        PathBuf::from(DEFAULT_DB_FILE)
    }

    /// Username offered as the login prompt default
    pub fn username(&self) -> String {
        self.username
            .clone()
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string())
    }
}
