//! Recognizer configuration — optional overrides loaded from ~/.sketchref/recognizer.yaml.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default distance below which a dot counts as touching geometry.
pub const DEFAULT_NEARNESS_THRESHOLD: f64 = 9.0;

/// Tunables for the dot reference recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Strict upper bound on the distance from a dot to an endpoint or segment
    /// for the dot to refer to it. A point exactly this far away is not near.
    #[serde(default = "RecognizerConfig::default_threshold")]
    pub nearness_threshold: f64,
}

impl RecognizerConfig {
    pub fn with_threshold(nearness_threshold: f64) -> Self {
        Self { nearness_threshold }
    }

    /// Load config from the standard path (~/.sketchref/recognizer.yaml).
    /// Returns None if the file is missing or invalid.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring recognizer config");
                None
            }
        }
    }

    /// Load config from an explicit YAML file.
    pub fn load_from(path: &Path) -> Result<Self, io::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Build a config from a caller-supplied threshold, rejecting values that
    /// are not finite and positive.
    pub fn try_with_threshold(nearness_threshold: f64) -> Result<Self, io::Error> {
        let config = Self::with_threshold(nearness_threshold);
        config.validate()?;
        Ok(config)
    }

    /// Check that the threshold is finite and positive.
    pub fn validate(&self) -> Result<(), io::Error> {
        if self.nearness_threshold.is_finite() && self.nearness_threshold > 0.0 {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "nearness_threshold must be positive, got {}",
                    self.nearness_threshold
                ),
            ))
        }
    }

    fn default_threshold() -> f64 {
        DEFAULT_NEARNESS_THRESHOLD
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_NEARNESS_THRESHOLD)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sketchref").join("recognizer.yaml"))
}
