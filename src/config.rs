use crate::scheduler::DEFAULT_SCHEDULE_TITLE;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "course-scheduler";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_EXPORT_PATH: &str = "schedule.txt";
const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Startup settings for the CLI and HTTP binaries. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub catalog_path: Option<PathBuf>,
    pub schedule_title: String,
    pub export_path: PathBuf,
    pub http_addr: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            schedule_title: DEFAULT_SCHEDULE_TITLE.to_string(),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
        }
    }
}

/// `<config dir>/course-scheduler/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl SchedulerConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// An explicit path must exist; otherwise the default location is used when present and
    /// built-in defaults apply when it is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }
}
