/// Viewer configuration
///
/// One gallery view covers every presentation variant; this struct picks
/// between them. It is serialized to JSON in the user's config directory:
/// - Linux: ~/.config/dermabar-gallery/config.json
/// - macOS: ~/Library/Application Support/dermabar-gallery/config.json
/// - Windows: %APPDATA%\dermabar-gallery\config.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }
}

/// How a pair is presented
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Stacked layers with a draggable divider
    #[default]
    Reveal,
    /// Two columns, before on the left
    SideBySide,
}

impl Layout {
    pub fn toggled(self) -> Self {
        match self {
            Layout::Reveal => Layout::SideBySide,
            Layout::SideBySide => Layout::Reveal,
        }
    }
}

/// Heading reveal settings
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    /// false = show everything immediately
    pub enabled: bool,
    /// Delay between consecutive tokens, in milliseconds
    pub stagger_ms: u64,
    /// Fade duration of a single token, in milliseconds
    pub fade_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stagger_ms: 100,
            fade_ms: 600,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ViewerConfig {
    pub theme: ThemeChoice,
    pub layout: Layout,
    pub motion: MotionConfig,
    /// Catalog opened at startup; the built-in showcase when unset
    pub catalog: Option<PathBuf>,
}

impl ViewerConfig {
    /// Convert to JSON string for storage
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the path where the config should be stored
    pub fn default_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or(GalleryError::NoConfigDir)?;
        path.push("dermabar-gallery");
        path.push("config.json");
        Ok(path)
    }

    /// Read the config at `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(GalleryError::io(path, e)),
        }
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        let loaded = Self::default_path().and_then(|path| Self::load(&path));
        match loaded {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("⚠️  Could not read viewer config ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| GalleryError::io(parent, e))?;
        }
        fs::write(path, self.to_json()?).map_err(|e| GalleryError::io(path, e))
    }

    /// Save to the default location
    pub fn persist(&self) -> Result<()> {
        self.save(&Self::default_path()?)
    }
}
