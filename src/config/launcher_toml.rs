#![forbid(unsafe_code)]

//! `launcher.toml` parsing
//!
//! The file is optional and sits next to the launcher executable. It can
//! move the launcher scripts to another directory and tune console output.

use crate::error::LaunchError;
use log::debug;
use serde::Deserialize;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the config file looked up beside the executable
pub const CONFIG_FILE_NAME: &str = "launcher.toml";

/// Environment variable that overrides the script directory
pub const SCRIPT_DIR_ENV: &str = "ADA_LAUNCHER_SCRIPT_DIR";

/// Root of `launcher.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scripts: ScriptsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[scripts]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptsConfig {
    /// Directory holding the launcher scripts; relative to the executable
    pub dir: Option<PathBuf>,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_banner")]
    pub banner: bool,
    #[serde(default)]
    pub color: ColorOption,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            banner: default_banner(),
            color: ColorOption::default(),
        }
    }
}

fn default_banner() -> bool {
    true
}

/// Console colour preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Colour only when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl Config {
    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load config from `path`
    ///
    /// A missing file yields the default config.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Config`] if the file exists but cannot be read
    /// or is not valid config.
    pub fn load(path: &Path) -> Result<Self, LaunchError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(LaunchError::Config {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        };

        debug!("loading config from {}", path.display());
        Config::parse(&content).map_err(|e| LaunchError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Load `launcher.toml` from the executable's directory
    pub fn load_beside(exe_dir: &Path) -> Result<Self, LaunchError> {
        Config::load(&exe_dir.join(CONFIG_FILE_NAME))
    }

    /// Directory to look for launcher scripts in
    ///
    /// Precedence: a non-empty `env_override`, then `[scripts] dir`
    /// (relative paths anchored at `exe_dir`), then `exe_dir` itself.
    pub fn script_dir(&self, exe_dir: &Path, env_override: Option<&OsStr>) -> PathBuf {
        if let Some(dir) = env_override.filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }

        match &self.scripts.dir {
            Some(dir) => exe_dir.join(dir),
            None => exe_dir.to_path_buf(),
        }
    }
}
