// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use penumbra::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.theme = Some("dark".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;
pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Penumbra";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: "light" or "dark". `None` selects the dark theme.
    pub theme: Option<String>,
    /// Delay before the rule-of-thirds guides fade out, in seconds.
    #[serde(default)]
    pub guide_hide_delay_secs: Option<f32>,
    /// Longest edge of the downscaled editing preview, in pixels.
    #[serde(default)]
    pub preview_max_edge: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: None,
            guide_hide_delay_secs: Some(DEFAULT_GUIDE_HIDE_DELAY_SECS),
            preview_max_edge: Some(DEFAULT_PREVIEW_MAX_EDGE),
        }
    }
}

impl Config {
    /// Returns the guide hide delay clamped to the supported range.
    #[must_use]
    pub fn guide_hide_delay(&self) -> std::time::Duration {
        let secs = self
            .guide_hide_delay_secs
            .unwrap_or(DEFAULT_GUIDE_HIDE_DELAY_SECS)
            .clamp(MIN_GUIDE_HIDE_DELAY_SECS, MAX_GUIDE_HIDE_DELAY_SECS);
        std::time::Duration::from_secs_f32(secs)
    }

    /// Returns the preview edge length clamped to the supported range.
    #[must_use]
    pub fn preview_edge(&self) -> u32 {
        self.preview_max_edge
            .unwrap_or(DEFAULT_PREVIEW_MAX_EDGE)
            .clamp(MIN_PREVIEW_MAX_EDGE, MAX_PREVIEW_MAX_EDGE)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
