use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors raised while locating or reading the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    #[error("failed to read config from {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration (stored in the platform config dir as config.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// UI theme/colors
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Diagnostic log output
    #[serde(default)]
    pub log: LogConfig,
}

/// Theme configuration with hex colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Border color of the focused column (hex, e.g. "#7571F9")
    #[serde(default = "default_color_focused")]
    pub color_focused: String,

    /// Border color of unfocused columns
    #[serde(default = "default_color_normal")]
    pub color_normal: String,

    /// Help text and other secondary text
    #[serde(default = "default_color_dimmed")]
    pub color_dimmed: String,

    /// Task titles
    #[serde(default = "default_color_text")]
    pub color_text: String,

    /// Task descriptions
    #[serde(default = "default_color_description")]
    pub color_description: String,

    /// Highlight of the selected task
    #[serde(default = "default_color_selected")]
    pub color_selected: String,

    /// Column titles
    #[serde(default = "default_color_column_header")]
    pub color_column_header: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_focused: default_color_focused(),
            color_normal: default_color_normal(),
            color_dimmed: default_color_dimmed(),
            color_text: default_color_text(),
            color_description: default_color_description(),
            color_selected: default_color_selected(),
            color_column_header: default_color_column_header(),
        }
    }
}

fn default_color_focused() -> String {
    "#5f5fd7".to_string() // Slate Blue
}

fn default_color_normal() -> String {
    "#3a3a3a".to_string() // Charcoal
}

fn default_color_dimmed() -> String {
    "#585858".to_string() // Gray
}

fn default_color_text() -> String {
    "#dddddd".to_string() // Off White
}

fn default_color_description() -> String {
    "#9c9991".to_string() // Warm Gray
}

fn default_color_selected() -> String {
    "#ee6ff8".to_string() // Pink
}

fn default_color_column_header() -> String {
    "#a0d2fa".to_string() // Light Blue Gray
}

impl ThemeConfig {
    /// Parse a hex color string to RGB tuple
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

/// Resolved colors handed to the renderer. Built once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub focused: Color,
    pub normal: Color,
    pub dimmed: Color,
    pub text: Color,
    pub description: Color,
    pub selected: Color,
    pub column_header: Color,
}

impl From<&ThemeConfig> for Theme {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            focused: hex_to_color(&config.color_focused),
            normal: hex_to_color(&config.color_normal),
            dimmed: hex_to_color(&config.color_dimmed),
            text: hex_to_color(&config.color_text),
            description: hex_to_color(&config.color_description),
            selected: hex_to_color(&config.color_selected),
            column_header: hex_to_color(&config.color_column_header),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from(&ThemeConfig::default())
    }
}

/// Helper to convert hex color string to ratatui Color
fn hex_to_color(hex: &str) -> Color {
    ThemeConfig::parse_hex(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

/// Log output settings. Logging is off unless enabled here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Filter directive, e.g. "info" or "taskboard=debug"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; defaults to taskboard.log in the data directory
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            file: None,
        }
    }
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

impl LogConfig {
    /// The file logs are written to
    pub fn file_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::data_dir()?.join("taskboard.log")),
        }
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dirs = project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get the path to the data directory
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        let dirs = project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// Colors for the renderer
    pub fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }
}

fn project_dirs() -> Result<directories::ProjectDirs, ConfigError> {
    directories::ProjectDirs::from("", "", "taskboard").ok_or(ConfigError::NoConfigDir)
}
