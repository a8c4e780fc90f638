//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Which element catalog to plot.
    pub catalog: CatalogConfig,
    /// Orbit curve sampling.
    pub geometry: GeometryConfig,
    /// Reference sphere mesh.
    pub sphere: SphereConfig,
    /// Plot cosmetics passed through to the renderer.
    pub render: RenderConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Element catalog selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// CelesTrak group identifier, e.g. `gps-ops` or `starlink`.
    pub group: String,
    /// Directory holding cached `<group>.json` documents.
    pub directory: PathBuf,
    /// Plot only the first `limit` satellites (0 = all).
    pub limit: usize,
}

/// Orbit curve settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeometryConfig {
    /// Points per orbit ellipse.
    pub sample_count: usize,
    /// Skip satellites whose elements do not describe a closed orbit.
    pub strict_elements: bool,
}

/// Reference sphere settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SphereConfig {
    pub radius_km: f64,
    pub longitude_divisions: usize,
    pub colatitude_divisions: usize,
}

/// Plot cosmetics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub x_label: String,
    pub y_label: String,
    pub z_label: String,
    pub tick_label_size: f32,
    /// Same scale on all three axes.
    pub equal_aspect: bool,
    /// Sphere wireframe colour, linear RGB.
    pub wireframe_color: [f32; 3],
    pub wireframe_opacity: f32,
    pub wireframe_line_width: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g., "debug", "info", "satorbit_scene=debug").
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            group: "gps-ops".to_string(),
            directory: PathBuf::from("."),
            limit: 40,
        }
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            sample_count: 100,
            strict_elements: true,
        }
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius_km: 6_781.0,
            longitude_divisions: 20,
            colatitude_divisions: 10,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            x_label: "X-axis (km)".to_string(),
            y_label: "Y-axis (km)".to_string(),
            z_label: "Z-axis (km)".to_string(),
            tick_label_size: 7.0,
            equal_aspect: true,
            wireframe_color: [0.0, 0.0, 1.0],
            wireframe_opacity: 0.5,
            wireframe_line_width: 0.5,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let write_err = |source| ConfigError::Write {
            path: config_path.clone(),
            source,
        };

        std::fs::create_dir_all(config_dir).map_err(write_err)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty)?;

        std::fs::write(&config_path, serialized).map_err(write_err)?;
        Ok(())
    }

    /// Re-read the file; `Some(new_config)` if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject settings that would produce an unusable plot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.geometry.sample_count < 2 {
            return Err(ConfigError::Invalid {
                field: "geometry.sample_count",
                reason: format!("need at least 2 points, got {}", self.geometry.sample_count),
            });
        }
        if !(self.sphere.radius_km.is_finite() && self.sphere.radius_km > 0.0) {
            return Err(ConfigError::Invalid {
                field: "sphere.radius_km",
                reason: format!("must be positive, got {}", self.sphere.radius_km),
            });
        }
        if self.sphere.longitude_divisions < 2 || self.sphere.colatitude_divisions < 2 {
            return Err(ConfigError::Invalid {
                field: "sphere",
                reason: "each grid direction needs at least 2 divisions".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.render.wireframe_opacity) {
            return Err(ConfigError::Invalid {
                field: "render.wireframe_opacity",
                reason: format!("must be within [0, 1], got {}", self.render.wireframe_opacity),
            });
        }
        Ok(())
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        Ok(ron::from_str(&contents)?)
    }
}
