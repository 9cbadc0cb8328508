//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GLM_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use glmath_linalg::{transform, Axis, Mat4, MathError, MatrixUniforms, Vec3};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Camera placement
    #[serde(default)]
    pub camera: CameraConfig,
    /// Projection parameters
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Model transform
    #[serde(default)]
    pub model: ModelConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GLM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        } else {
            log::debug!("No {} found, using built-in defaults", default_path.display());
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // GLM_PROJECTION__FOV=60 -> projection.fov = 60
        figment = figment.merge(Env::prefixed("GLM_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Build and flatten the model, view and projection matrices
    pub fn uniforms(&self) -> Result<MatrixUniforms, ConfigError> {
        let model = self.model.model_matrix()?;
        let view = self.camera.view_matrix();
        let projection = self.projection.projection_matrix();
        Ok(MatrixUniforms::new(&model, &view, &projection))
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position [x, y, z]
    pub eye: [f32; 3],
    /// Point the camera looks at [x, y, z]
    pub at: [f32; 3],
    /// Up direction, need not be normalized
    pub up: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
            at: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}

impl CameraConfig {
    pub fn view_matrix(&self) -> Mat4 {
        transform::look_at(self.at.into(), self.eye.into(), self.up.into())
    }
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Viewport width / height
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl ProjectionConfig {
    pub fn projection_matrix(&self) -> Mat4 {
        transform::perspective(self.fov, self.aspect, self.near, self.far)
    }
}

/// Model transform configuration, applied as scale, then rotation, then translation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Translation [x, y, z]
    pub translation: [f32; 3],
    /// Per-axis scale [x, y, z]
    pub scale: [f32; 3],
    /// Rotation angle in degrees
    pub rotation_degrees: f32,
    /// Rotation axis, one of [1,0,0], [0,1,0], [0,0,1]
    pub rotation_axis: [f32; 3],
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            translation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
            rotation_degrees: 0.0,
            rotation_axis: [0.0, 1.0, 0.0],
        }
    }
}

impl ModelConfig {
    /// Compose `T * R * S`
    pub fn model_matrix(&self) -> Result<Mat4, MathError> {
        let axis = Axis::try_from(Vec3::from(self.rotation_axis))?;

        let m = transform::scale(Mat4::IDENTITY, self.scale.into());
        let m = transform::rotate(m, self.rotation_degrees, axis);
        Ok(transform::translate(m, self.translation.into()))
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

impl From<MathError> for ConfigError {
    fn from(e: MathError) -> Self {
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
    use glmath_linalg::Vec4;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.projection.fov, 45.0);
        assert_eq!(config.camera.eye, [0.0, 0.0, 5.0]);
        assert_eq!(config.model.scale, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("[projection]"));
        assert!(toml.contains("rotation_axis"));
    }

    #[test]
    fn test_default_model_is_identity() {
        let m = ModelConfig::default().model_matrix().unwrap();
        assert_eq!(m, Mat4::IDENTITY);
    }

    #[test]
    fn test_model_matrix_order() {
        let model = ModelConfig {
            translation: [10.0, 0.0, 0.0],
            scale: [2.0, 2.0, 2.0],
            rotation_degrees: 90.0,
            rotation_axis: [0.0, 0.0, 1.0],
        };
        let m = model.model_matrix().unwrap();
        // Scale to (2, 0, 0), rotate to (0, 2, 0), translate to (10, 2, 0)
        let p = m * Vec4::point(1.0, 0.0, 0.0);
        assert!((p.x - 10.0).abs() < 1e-4);
        assert!((p.y - 2.0).abs() < 1e-4);
        assert!(p.z.abs() < 1e-4);
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let config: AppConfig = toml::from_str("[projection]\nfov = 60.0\n").unwrap();
        assert_eq!(config.projection.fov, 60.0);
        assert_eq!(config.projection.far, 100.0);
        assert_eq!(config.camera.up, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_bad_rotation_axis() {
        let model = ModelConfig {
            rotation_axis: [0.0, 0.7, 0.7],
            ..ModelConfig::default()
        };
        assert!(model.model_matrix().is_err());

        let config = AppConfig { model, ..AppConfig::default() };
        let err = config.uniforms().unwrap_err();
        assert!(err.to_string().contains("not a unit basis vector"));
    }

    #[test]
    fn test_uniforms_are_column_major() {
        let config = AppConfig::default();
        let u = config.uniforms().unwrap();
        let view = config.camera.view_matrix();
        // Column 3 of the view holds the negated eye
        assert_eq!(u.view[3][2], view.get(2, 3));
        assert_eq!(u.view[3][2], -5.0);
        assert_eq!(u.projection[2][3], -1.0);
    }
}
