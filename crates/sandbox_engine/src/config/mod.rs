//! Configuration system
//!
//! All configuration types in one place, serializable to TOML or RON.
//! Everything has sensible defaults so the sandbox runs with no config
//! file at all.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration trait
///
/// Provides file loading/saving with the format chosen by extension.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Window creation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title string
    pub title: String,
    /// Initial client area width in pixels
    pub width: u32,
    /// Initial client area height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Game Sandbox".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
        }
    }
}

/// Vulkan instance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VulkanConfig {
    /// Application version (major, minor, patch) for the instance
    pub application_version: (u32, u32, u32),
    /// Whether to enable validation layers; `None` means debug builds only
    pub enable_validation: Option<bool>,
}

impl Default for VulkanConfig {
    fn default() -> Self {
        Self {
            application_version: (1, 0, 0),
            enable_validation: None,
        }
    }
}

impl VulkanConfig {
    /// Resolve the validation flag against the build type
    pub fn validation_enabled(&self) -> bool {
        self.enable_validation.unwrap_or(cfg!(debug_assertions))
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level to emit ("off", "error", "warn", "info", "debug", "trace")
    pub level: String,
    /// Log file path; `None` logs to stdout only
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some(PathBuf::from("log.txt")),
        }
    }
}

impl LogConfig {
    /// Parse the configured level, falling back to `Info` on nonsense
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Ad-hoc shader load settings
///
/// The sandbox has no pipeline yet; when paths are given, the SPIR-V blobs
/// are loaded and validated at init as a smoke test.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    /// Path to a vertex shader SPIR-V file
    pub vertex: Option<PathBuf>,
    /// Path to a fragment shader SPIR-V file
    pub fragment: Option<PathBuf>,
}

/// Top-level sandbox configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window creation settings
    pub window: WindowConfig,
    /// Vulkan instance settings
    pub vulkan: VulkanConfig,
    /// Logging settings
    pub log: LogConfig,
    /// Ad-hoc shader loads performed at init
    pub shaders: ShaderConfig,
    /// Ad-hoc texture load performed at init
    pub texture: Option<PathBuf>,
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load from `path` when it exists, otherwise return defaults
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sandbox() {
        let config = GameConfig::default();
        assert_eq!(config.window.title, "Game Sandbox");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert!(!config.window.fullscreen);
        assert_eq!(config.log.file, Some(PathBuf::from("log.txt")));
        assert_eq!(config.log.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            [window]
            width = 1280
            height = 720
            "#,
        )
        .unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.window.title, "Game Sandbox");
    }

    #[test]
    fn toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sandbox.toml");
        let path = path.to_str().unwrap();

        let mut config = GameConfig::default();
        config.window.title = "round trip".to_string();
        config.vulkan.enable_validation = Some(false);
        config.save_to_file(path).unwrap();

        let loaded = GameConfig::load_from_file(path).unwrap();
        assert_eq!(loaded.window.title, "round trip");
        assert_eq!(loaded.vulkan.enable_validation, Some(false));
        assert!(!loaded.vulkan.validation_enabled());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let config = GameConfig::default();
        assert!(matches!(
            config.save_to_file("sandbox.yaml"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn load_or_default_without_file() {
        let config = GameConfig::load_or_default("does-not-exist.toml").unwrap();
        assert_eq!(config.window.width, 800);
    }

    #[test]
    fn bad_level_falls_back_to_info() {
        let config = LogConfig {
            level: "chatty".to_string(),
            file: None,
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
