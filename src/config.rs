// SPDX-License-Identifier: GPL-3.0-only

//! Plugin settings persisted as JSON.
//!
//! The host framework points the plugin at a settings file; everything in
//! it is optional and falls back to the defaults below. Style and resource
//! loading proper (themes, key pixmaps) belongs to the rendering backend,
//! not here — the settings only carry what the layout core itself needs.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default long-press threshold in milliseconds.
pub const DEFAULT_LONG_PRESS_THRESHOLD_MS: u64 = 600;

/// Settings consumed by the layout core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSettings {
    /// Base directory for resolving background image names.
    #[serde(default)]
    pub image_directory: PathBuf,

    /// Keyboard identifier to activate on startup, empty for the
    /// updater's own default.
    #[serde(default)]
    pub active_keyboard_id: String,

    /// How long a press must be held to count as a long press.
    #[serde(default = "default_long_press_threshold_ms")]
    pub long_press_threshold_ms: u64,
}

fn default_long_press_threshold_ms() -> u64 {
    DEFAULT_LONG_PRESS_THRESHOLD_MS
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            image_directory: PathBuf::new(),
            active_keyboard_id: String::new(),
            long_press_threshold_ms: DEFAULT_LONG_PRESS_THRESHOLD_MS,
        }
    }
}

impl PluginSettings {
    /// Loads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|source| SettingsError::io(source, path))?;
        serde_json::from_str(&contents).map_err(|source| SettingsError::json(source, path))
    }

    /// Writes settings to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|source| SettingsError::json(source, path))?;
        fs::write(path, contents).map_err(|source| SettingsError::io(source, path))
    }
}

/// Error type for settings load/save operations.
#[derive(Debug)]
pub enum SettingsError {
    /// I/O error reading or writing the settings file.
    Io {
        /// The underlying I/O error.
        source: std::io::Error,
        /// File being accessed.
        file_path: String,
    },

    /// JSON (de)serialization error.
    Json {
        /// The underlying JSON error.
        source: serde_json::Error,
        /// File being parsed, with the error line when available.
        file_path: String,
        /// Line number where the error occurred.
        line_number: Option<usize>,
    },
}

impl SettingsError {
    fn io(source: std::io::Error, path: &Path) -> Self {
        Self::Io {
            source,
            file_path: path.display().to_string(),
        }
    }

    fn json(source: serde_json::Error, path: &Path) -> Self {
        let line_number = Some(source.line()).filter(|line| *line > 0);
        Self::Json {
            source,
            file_path: path.display().to_string(),
            line_number,
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { source, file_path } => {
                write!(f, "I/O error accessing '{}': {}", file_path, source)
            }
            SettingsError::Json {
                source,
                file_path,
                line_number,
            } => {
                write!(f, "JSON error in '{}'", file_path)?;
                if let Some(line) = line_number {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", source)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Json { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
