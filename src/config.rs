// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! User settings.
//!
//! Settings are read from a YAML file named by `IMAGE_MARKER_CONFIG`, or from
//! `image-marker.yaml` in the working directory. Missing keys fall back to
//! their defaults, and a missing file means all defaults.

use crate::models::annotation::MarkerColor;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the settings file.
pub const CONFIG_ENV_VAR: &str = "IMAGE_MARKER_CONFIG";
/// Settings file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "image-marker.yaml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    /// Marker diameter in points at scale 1.
    pub marker_diameter: f32,
    pub default_color: MarkerColor,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 720.0,
            marker_diameter: 10.0,
            default_color: MarkerColor::Red,
        }
    }
}

impl Settings {
    /// Load settings from the configured location, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::from_yaml(&yaml)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(yaml)?;
        anyhow::ensure!(
            settings.marker_diameter > 0.0,
            "marker_diameter must be positive, got {}",
            settings.marker_diameter
        );
        Ok(settings)
    }
}
