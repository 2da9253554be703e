//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`T4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// View and projection configuration
    #[serde(default)]
    pub view: ViewConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`T4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // T4D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("T4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tess4D - Tesseract Viewer".to_string(),
            width: 960,
            height: 640,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// View and projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Side length of the tesseract
    pub shape_size: f32,
    /// Starting screen-space scale in pixels per projected unit
    pub initial_scale: f32,
    /// Multiplier applied per mouse-wheel zoom step
    pub zoom_step: f32,
    /// Field-of-view factor; the projection FOV is `PI / scale * fov_factor`
    pub fov_factor: f32,
    /// Near plane of the perspective matrix
    pub near: f32,
    /// Far plane of the perspective matrix
    pub far: f32,
    /// Distance the shape sits down the view axis
    pub view_distance: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            shape_size: 2.0,
            initial_scale: 100.0,
            zoom_step: 1.1,
            fov_factor: 7.0,
            near: 100.0,
            far: 500.0,
            view_distance: 7.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Rotation angle per cursor unit of scaled drag distance
    pub rotation_sensitivity: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            rotation_sensitivity: 0.25,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Edge line color [r, g, b, a]
    pub edge_color: [f32; 4],
    /// Vertex marker fill color [r, g, b, a]
    pub vertex_fill_color: [f32; 4],
    /// Vertex marker outline color [r, g, b, a]
    pub vertex_outline_color: [f32; 4],
    /// Vertex marker diameter in pixels
    pub marker_diameter: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.83, 0.83, 0.83, 1.0],
            edge_color: [0.0, 0.0, 0.0, 1.0],
            vertex_fill_color: [1.0, 0.0, 0.0, 1.0],
            vertex_outline_color: [0.0, 0.0, 0.0, 1.0],
            marker_diameter: 8.0,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.view.initial_scale, 100.0);
        assert_eq!(config.view.near, 100.0);
        assert_eq!(config.view.far, 500.0);
        assert_eq!(config.rendering.marker_diameter, 8.0);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("zoom_step"));
    }

    #[test]
    fn test_load_from_missing_dir_yields_defaults() {
        let config = AppConfig::load_from("nonexistent-config-dir").unwrap();
        assert_eq!(config.view.zoom_step, 1.1);
    }
}
