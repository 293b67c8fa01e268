//! Palette configuration, loadable from YAML.
//!
//! A config file overrides the tuned per-family defaults:
//!
//! ```yaml
//! angle_shift: 10.0
//! base_radius: 0.4
//! base_height: 0.1
//! overrides:
//!   255: "#FFFFFF"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BitmixError, Result};

/// Palette construction parameters.
///
/// Bounds are enforced when the palette is built, not here, so a config can
/// be loaded, inspected, and reported on before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Hue angle of bit 0 in degrees, 0..=45.
    pub angle_shift: f32,

    /// Saturation/chroma of every bit colour, 0..=1.
    pub base_radius: f32,

    /// Value/lightness contributed by each set bit, 0..=1.
    pub base_height: f32,

    /// Explicit byte → hex colour overrides, consulted before the mixing
    /// formula.
    pub overrides: HashMap<u8, String>,
}

impl PaletteConfig {
    /// Create a config with no overrides.
    pub fn new(angle_shift: f32, base_radius: f32, base_height: f32) -> Self {
        Self {
            angle_shift,
            base_radius,
            base_height,
            overrides: HashMap::new(),
        }
    }

    /// Add a byte → hex colour override.
    pub fn with_override(mut self, value: u8, hex: impl Into<String>) -> Self {
        self.overrides.insert(value, hex.into());
        self
    }

    /// Load a config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BitmixError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read palette config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| BitmixError::Parse {
            message: format!("Invalid palette config: {}", e),
            help: Some("Expected angle_shift, base_radius, base_height, overrides".to_string()),
        })
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        // Matches the HSV family defaults: eight well-separated hues whose
        // heights sum to 1.0 across a full byte.
        Self::new(0.0, 0.5, 0.125)
    }
}
