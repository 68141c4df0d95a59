//! Configuration management for hgimport
//!
//! Supports the following sections:
//! - [hg] - Mercurial executable and workspace marker
//! - [scan] - Marker pairing mode
//! - [fetch] - HTTP settings for downloading the diff
//! - [log] - Log level and optional log file

use crate::error::{CoreError, CoreResult};
use crate::get_config_home;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

/// Name of the per-repository config file, looked up in the working directory
pub const REPO_CONFIG_FILE: &str = ".hgimport.toml";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    #[serde(default)]
    pub hg: Option<HgConfig>,

    #[serde(default)]
    pub scan: Option<ScanConfig>,

    #[serde(default)]
    pub fetch: Option<FetchConfig>,

    #[serde(default)]
    pub log: Option<LogConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            hg: None,
            scan: None,
            fetch: None,
            log: None,
        }
    }
}

/// Mercurial invocation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HgConfig {
    #[serde(default = "default_hg_executable")]
    pub executable: String,

    /// Directory that must exist in the working directory for it to count
    /// as a workspace root
    #[serde(default = "default_workspace_marker")]
    pub workspace_marker: String,
}

impl Default for HgConfig {
    fn default() -> Self {
        Self {
            executable: default_hg_executable(),
            workspace_marker: default_workspace_marker(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// "strict" or "lenient"
    #[serde(default = "default_pairing")]
    pub pairing: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            pairing: default_pairing(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout. Unset means wait for the server indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

fn default_hg_executable() -> String {
    "hg".to_string()
}

fn default_workspace_marker() -> String {
    ".hg".to_string()
}

fn default_pairing() -> String {
    "strict".to_string()
}

fn default_user_agent() -> String {
    format!("hgimport/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Get a warning message for unsupported versions
    pub fn version_warning(&self) -> Option<String> {
        if !self.is_version_supported() {
            Some(format!(
                "Warning: Configuration version '{}' is not supported. Supported versions: {}. Using defaults where needed.",
                self.version,
                SUPPORTED_CONFIG_VERSIONS.join(", ")
            ))
        } else {
            None
        }
    }

    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| CoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // Logging is not up yet when config is read
        if let Some(warning) = config.version_warning() {
            eprintln!("{}", warning);
        }

        if config.version.is_empty() {
            config.version = CURRENT_CONFIG_VERSION.to_string();
        }

        Ok(config)
    }

    pub fn get_config_dir() -> Option<PathBuf> {
        get_config_home().map(|h| h.join("hgimport"))
    }

    /// Load configuration with priority:
    /// 1. Defaults
    /// 2. Global config ($XDG_CONFIG_HOME/hgimport/config.toml)
    /// 3. Repo config (.hgimport.toml)
    /// 4. Explicit config file, which must exist and parse
    pub fn load(explicit: Option<&Path>) -> CoreResult<Self> {
        let mut config = Self::default();

        if let Some(config_dir) = Self::get_config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                match Self::load_from_file(&global_config) {
                    Ok(loaded) => config = config.merge(loaded),
                    Err(e) => eprintln!("Warning: ignoring global config: {}", e),
                }
            }
        }

        let repo_config = PathBuf::from(REPO_CONFIG_FILE);
        if repo_config.exists() {
            match Self::load_from_file(&repo_config) {
                Ok(loaded) => config = config.merge(loaded),
                Err(e) => eprintln!("Warning: ignoring repo config: {}", e),
            }
        }

        if let Some(path) = explicit {
            config = config.merge(Self::load_from_file(path)?);
        }

        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(mut self, other: Config) -> Self {
        if !other.version.is_empty() {
            self.version = other.version;
        }
        if other.hg.is_some() {
            self.hg = other.hg;
        }
        if other.scan.is_some() {
            self.scan = other.scan;
        }
        if other.fetch.is_some() {
            self.fetch = other.fetch;
        }
        if other.log.is_some() {
            self.log = other.log;
        }
        self
    }

    pub fn hg(&self) -> HgConfig {
        self.hg.clone().unwrap_or_default()
    }

    pub fn scan(&self) -> ScanConfig {
        self.scan.clone().unwrap_or_default()
    }

    pub fn fetch(&self) -> FetchConfig {
        self.fetch.clone().unwrap_or_default()
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }
}
