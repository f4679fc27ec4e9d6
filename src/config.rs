//! Optional TOML configuration.
//!
//! Looked up at `$AERO_BLOG_CONFIG` or, failing that, `config.toml` in the
//! platform config directory. Callers fall back to [`BlogConfig::default`]
//! when nothing usable is found.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{BlogError, Result};

pub const CONFIG_ENV: &str = "AERO_BLOG_CONFIG";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub site_title: String,
    pub log_level: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            site_title: "AeroBlог".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn config_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com", "aero", "aero_blog").ok_or(BlogError::ConfigDir)?;
    Ok(proj.config_dir().to_path_buf())
}

pub fn config_file_path() -> Result<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(p));
    }
    Ok(config_dir()?.join("config.toml"))
}

/// Reads and parses `path`. `Ok(None)` when the file does not exist.
pub fn read_config(path: &Path) -> Result<Option<BlogConfig>> {
    let text = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(BlogError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    Ok(Some(toml::from_str(&text)?))
}

/// Resolves the config location and reads it. `Ok(None)` means no file.
pub fn load_config() -> Result<Option<(PathBuf, BlogConfig)>> {
    let path = config_file_path()?;
    Ok(read_config(&path)?.map(|cfg| (path, cfg)))
}
