use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

use super::DisplaySpec;

/// Converter configuration loaded from an optional YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Target panel resolution, "800x480" or "480x800"
    #[serde(default = "default_resolution")]
    pub resolution: String,

    /// Rotate portrait photos clockwise before cropping
    #[serde(default = "default_auto_rotate")]
    pub auto_rotate: bool,

    /// Maximum directory depth visited in batch mode
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Where converted files are written
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_resolution() -> String {
    DisplaySpec::LANDSCAPE.to_string()
}

fn default_auto_rotate() -> bool {
    true
}

fn default_max_depth() -> usize {
    3
}

/// Values given on the command line. `None` leaves the configured value.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub resolution: Option<String>,
    pub auto_rotate: Option<bool>,
    pub max_depth: Option<usize>,
    pub output_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// The file was asked for explicitly, so a missing or malformed file is
    /// an error rather than a silent fallback.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_yaml(&content)
            .map_err(|e| ConvertError::Config(format!("{}: {e}", path.display())))?;

        tracing::info!(
            path = %path.display(),
            resolution = %config.resolution,
            auto_rotate = config.auto_rotate,
            max_depth = config.max_depth,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from a YAML string. An empty document yields the
    /// defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(resolution) = overrides.resolution {
            self.resolution = resolution;
        }
        if let Some(auto_rotate) = overrides.auto_rotate {
            self.auto_rotate = auto_rotate;
        }
        if let Some(max_depth) = overrides.max_depth {
            self.max_depth = max_depth;
        }
        if overrides.output_dir.is_some() {
            self.output_dir = overrides.output_dir;
        }
        self
    }

    /// Panel the output is sized for
    pub fn display_spec(&self) -> DisplaySpec {
        DisplaySpec::parse(&self.resolution)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            auto_rotate: default_auto_rotate(),
            max_depth: default_max_depth(),
            output_dir: None,
        }
    }
}
