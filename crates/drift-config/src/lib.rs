//! Configuration file handling for drift.
//!
//! Settings live in `config.toml` under the platform config directory. Any
//! key may be omitted; missing keys fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, eyre};
use directories::ProjectDirs;
use drift_core::FieldConfig;
use serde::{Deserialize, Serialize};

/// Name of the config file inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Particle-count policy and resize behaviour.
    pub field: FieldSettings,
    /// Terminal rendering.
    pub display: DisplaySettings,
}

/// Settings for the particle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Viewports narrower than this many pixels use `mobile_count`.
    pub mobile_breakpoint: f32,
    pub mobile_count: usize,
    pub desktop_count: usize,
    /// Quiet period before a resize is applied.
    pub resize_debounce_ms: u64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        let defaults = FieldConfig::default();
        Self {
            mobile_breakpoint: defaults.mobile_breakpoint,
            mobile_count: defaults.mobile_count,
            desktop_count: defaults.desktop_count,
            resize_debounce_ms: defaults.resize_debounce_ms,
        }
    }
}

impl FieldSettings {
    pub fn to_field_config(&self) -> FieldConfig {
        FieldConfig {
            mobile_breakpoint: self.mobile_breakpoint,
            mobile_count: self.mobile_count,
            desktop_count: self.desktop_count,
            resize_debounce_ms: self.resize_debounce_ms,
        }
    }
}

/// Settings for drawing in the terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Refresh rate of the animation.
    pub fps: u32,
    /// Pixel width assumed for one terminal cell.
    pub cell_width_px: f32,
    /// Pixel height assumed for one terminal cell.
    pub cell_height_px: f32,
    /// Background color as `[r, g, b]`.
    pub background: [u8; 3],
    /// Alpha multiplier applied when compositing particles.
    pub gain: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fps: 60,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            background: [10, 10, 15],
            gain: 3.0,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "drift").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&contents).wrap_err_with(|| format!("invalid config file {}", path.display()))
    }

    /// Parse TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)
            .wrap_err_with(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.display.fps == 0 {
            return Err(eyre!("display.fps must be at least 1"));
        }
        if self.display.cell_width_px <= 0.0 || self.display.cell_height_px <= 0.0 {
            return Err(eyre!("display cell size must be positive"));
        }
        if self.field.mobile_breakpoint < 0.0 {
            return Err(eyre!("field.mobile_breakpoint must not be negative"));
        }
        Ok(())
    }
}
