//! TOML configuration, read once at startup.
//!
//! Lookup order: an explicit `--config` path (must exist), then
//! `<config_dir>/notes-tasks/config.toml` (optional), then built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{DEFAULT_COLOR, palette_index};

const APP_DIR: &str = "notes-tasks";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "notes-tasks.log";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub home: HomeConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditorConfig {
    /// Swatch preselected for new entries
    #[serde(default = "default_color")]
    pub default_color: String,
}

/// Which sections start expanded
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HomeConfig {
    #[serde(default)]
    pub show_notes: bool,

    #[serde(default)]
    pub show_tasks: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `info` or `notes_tasks=debug`
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Configured log file, or the platform cache directory when none is set.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE)))
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        match explicit {
            Some(path) => Config::from_file(path),
            None => match Config::default_path() {
                Some(path) if path.exists() => Config::from_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.default_color_index().map(|_| ())
    }

    /// Palette position of the configured default color.
    pub fn default_color_index(&self) -> Result<usize> {
        palette_index(&self.editor.default_color)
            .ok_or_else(|| Error::UnknownColor(self.editor.default_color.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_color_index().unwrap(), 0);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn sections_override_defaults() {
        let config: Config = toml::from_str(
            r##"
            [editor]
            default_color = "#bbdefb"

            [home]
            show_tasks = true

            [log]
            level = "debug"
            file = "/tmp/notes.log"
            "##,
        )
        .unwrap();
        assert_eq!(config.default_color_index().unwrap(), 6);
        assert!(!config.home.show_notes);
        assert!(config.home.show_tasks);
        assert_eq!(config.log.file_path(), Some(PathBuf::from("/tmp/notes.log")));
    }

    #[test]
    fn off_palette_color_is_rejected() {
        let config: Config = toml::from_str("[editor]\ndefault_color = \"#000000\"").unwrap();
        assert!(matches!(config.validate(), Err(Error::UnknownColor(c)) if c == "#000000"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
