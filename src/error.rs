#![forbid(unsafe_code)]

//! Error taxonomy for the launcher and its exit-code mapping

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a clean run or `--help`
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when the launcher itself fails (spawn, config, console I/O)
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for invalid arguments
pub const EXIT_USAGE: i32 = 2;

/// Errors that stop the launcher before or instead of running a script
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A flag that takes a value was the last token
    #[error("Missing value for {flag}.")]
    MissingValue { flag: String },

    /// A token that is not a recognised flag
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// `--tool` named something other than listen or sca
    #[error("Unknown tool: {0} (expected listen or sca).")]
    UnknownTool(String),

    /// The port override contains something other than decimal digits
    #[error("Port must be a number.")]
    InvalidPort(String),

    /// `--help` was given; usage goes to stdout and the process exits 0
    #[error("help requested")]
    HelpRequested,

    /// The launcher script could not be started
    #[error("Failed to launch {}: {source}", script.display())]
    Spawn {
        script: PathBuf,
        #[source]
        source: io::Error,
    },

    /// launcher.toml exists but could not be read or parsed
    #[error("Failed to load config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Writing to the console failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LaunchError {
    /// True for errors caused by the command line itself
    ///
    /// These are reported together with the usage text.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            LaunchError::MissingValue { .. }
                | LaunchError::UnknownOption(_)
                | LaunchError::UnknownTool(_)
                | LaunchError::InvalidPort(_)
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::HelpRequested => EXIT_SUCCESS,
            e if e.is_invalid_argument() => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
