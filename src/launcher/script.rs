#![forbid(unsafe_code)]

//! Launcher script path resolution

use crate::cli::Tool;
use std::io;
use std::path::{Path, PathBuf};

/// Host convention for launcher scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Batch files (`listen.bat`)
    Windows,
    /// Shell scripts (`listen.sh`)
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn script_extension(&self) -> &'static str {
        match self {
            Platform::Windows => "bat",
            Platform::Unix => "sh",
        }
    }
}

/// Path of the launcher script for `tool` inside `dir`
///
/// Pure path construction: the script is not required to exist.
pub fn resolve_script_path(dir: &Path, tool: Tool, platform: Platform) -> PathBuf {
    dir.join(format!("{}.{}", tool.as_str(), platform.script_extension()))
}

/// Directory containing the running executable
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable path {} has no parent directory", exe.display()),
        )
    })
}
