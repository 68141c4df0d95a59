//! # hgimport-core
//!
//! Shared configuration and logging setup for the hgimport tools.

pub mod config;
mod error;
pub mod logging;

pub use config::{Config, FetchConfig, HgConfig, LogConfig, ScanConfig};
pub use error::{CoreError, CoreResult};
pub use logging::init_logging;

use std::path::PathBuf;

/// Resolve the user configuration home, honouring `XDG_CONFIG_HOME`.
pub fn get_config_home() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg);
        if path.is_absolute() {
            return Some(path);
        }
    }
    dirs::home_dir().map(|h| h.join(".config"))
}
