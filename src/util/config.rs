use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::pretty::{DEFAULT_MAX_AGE_DAYS, FormatOptions};
use crate::util::clock::NaiveTimezone;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_max_age_days")]
    pub max_age_days: u32,
    #[serde(default)]
    pub naive_timezone: NaiveTimezone,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub keep_original: bool,
    #[serde(default)]
    pub json: bool,
}

fn default_max_age_days() -> u32 {
    DEFAULT_MAX_AGE_DAYS
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_age_days: default_max_age_days(),
            naive_timezone: NaiveTimezone::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        let mut candidates = Vec::new();

        // 1. ~/.config/prettydate/config.toml
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/prettydate/config.toml"));
        }

        // 2. Platform config dir (macOS: ~/Library/Application Support/prettydate/)
        if let Some(proj_dirs) = ProjectDirs::from("", "", "prettydate") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Formatter options with the naive timezone resolved at `now`.
    pub fn format_options(&self, now: DateTime<Utc>) -> FormatOptions {
        FormatOptions::default()
            .with_max_age_days(self.format.max_age_days)
            .with_naive_offset(self.format.naive_timezone.resolve(now))
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "prettydate") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/prettydate/logs")
    }
}
