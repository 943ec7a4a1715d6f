//! Configuration for the viewer.
//!
//! Provides configuration loading, saving, and validation for camera and
//! window settings. Defaults match the stock rover setup: 640x480 preview
//! refreshed every 100ms in a 640x600 window.

use crate::errors::CameraError;
use crate::types::CameraFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub camera: CameraSettings,
    pub window: WindowSettings,
}

/// Camera-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Device index (V4L2 /dev/videoN)
    pub device_index: u32,
    /// Capture resolution [width, height]
    pub resolution: [u32; 2],
    /// Frames per second requested from the device
    pub fps: u32,
    /// Preview refresh period in milliseconds
    pub frame_interval_ms: u64,
}

/// Window placement and sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    /// Initial position [x, y]
    pub position: [f32; 2],
    /// Initial size [width, height]
    pub size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            camera: CameraSettings {
                device_index: 0,
                resolution: [640, 480],
                fps: 30,
                frame_interval_ms: 100,
            },
            window: WindowSettings {
                title: "Rover Camera".to_string(),
                position: [100.0, 100.0],
                size: [640.0, 600.0],
            },
        }
    }
}

impl ViewerConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CameraError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            CameraError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        let config: ViewerConfig = toml::from_str(&contents).map_err(|e| {
            CameraError::ConfigError(format!("Failed to parse config file: {}", e))
        })?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CameraError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CameraError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| {
            CameraError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, toml_string).map_err(|e| {
            CameraError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("rovercam.toml")
    }

    /// Load from default location or fall back to defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.camera.resolution[0] == 0 || self.camera.resolution[1] == 0 {
            return Err("Invalid capture resolution".to_string());
        }
        if self.camera.fps == 0 || self.camera.fps > 240 {
            return Err("Invalid FPS (must be 1-240)".to_string());
        }
        if self.camera.frame_interval_ms == 0 {
            return Err("Frame interval must be at least 1ms".to_string());
        }
        if self.window.size[0] <= 0.0 || self.window.size[1] <= 0.0 {
            return Err("Invalid window size".to_string());
        }
        Ok(())
    }

    /// Capture format requested from the camera source
    pub fn capture_format(&self) -> CameraFormat {
        CameraFormat::new(
            self.camera.resolution[0],
            self.camera.resolution[1],
            self.camera.fps,
        )
    }

    /// Preview refresh period
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.camera.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.camera.resolution, [640, 480]);
        assert_eq!(config.camera.frame_interval_ms, 100);
        assert_eq!(config.window.position, [100.0, 100.0]);
        assert_eq!(config.window.size, [640.0, 600.0]);
    }

    #[test]
    fn test_config_validation() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());

        let mut bad_resolution = config.clone();
        bad_resolution.camera.resolution = [0, 0];
        assert!(bad_resolution.validate().is_err());

        let mut bad_interval = ViewerConfig::default();
        bad_interval.camera.frame_interval_ms = 0;
        assert!(bad_interval.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("rovercam.toml");

        let config = ViewerConfig::default();
        assert!(config.save_to_file(&config_path).is_ok());

        let loaded = ViewerConfig::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.camera.frame_interval_ms, config.camera.frame_interval_ms);
        assert_eq!(loaded.window.title, config.window.title);
    }

    #[test]
    fn test_config_toml_format() {
        let config = ViewerConfig::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        assert!(toml_string.contains("[camera]"));
        assert!(toml_string.contains("[window]"));
        assert!(toml_string.contains("frame_interval_ms"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ViewerConfig::load_from_file("nonexistent_file.toml");
        assert!(result.is_ok()); // Should return default
        assert_eq!(result.unwrap().camera.frame_interval_ms, 100);
    }

    #[test]
    fn test_capture_format_matches_settings() {
        let config = ViewerConfig::default();
        let format = config.capture_format();
        assert_eq!(format.width, 640);
        assert_eq!(format.height, 480);
    }
}
