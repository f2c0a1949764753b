#![forbid(unsafe_code)]

//! Running a launcher script as a child process

use crate::error::{EXIT_FAILURE, LaunchError};
use log::debug;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Runs a launcher script and reports its exit code
pub trait ScriptRunner {
    /// Run `script` with `args`, blocking until it exits
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Spawn`] if the script could not be started.
    /// A script that starts and fails is not an error: its exit code is
    /// returned as-is.
    fn run(&mut self, script: &Path, args: &[OsString]) -> Result<i32, LaunchError>;
}

/// Spawns the script with inherited stdio and waits for it
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ScriptRunner for ProcessRunner {
    fn run(&mut self, script: &Path, args: &[OsString]) -> Result<i32, LaunchError> {
        debug!("spawning {} with args {:?}", script.display(), args);

        let status = Command::new(script)
            .args(args)
            .status()
            .map_err(|source| LaunchError::Spawn {
                script: script.to_path_buf(),
                source,
            })?;

        debug!("{} exited with {}", script.display(), status);
        Ok(exit_code_of(status))
    }
}

/// Exit code to propagate for a finished child
///
/// A child killed by a signal has no exit code; on Unix this follows the
/// shell convention of 128 + signal number.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    EXIT_FAILURE
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::os::unix::process::ExitStatusExt;
    use tempfile::TempDir;

    fn write_script(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_exit_code_is_propagated() {
        let dir = TempDir::new().unwrap();
        let script = write_script(&dir, "sca.sh", "exit 7");

        let code = ProcessRunner.run(&script, &[]).unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    fn test_args_reach_the_script() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("args.txt");
        let script = write_script(
            &dir,
            "listen.sh",
            &format!("printf '%s\\n' \"$@\" > '{}'", out.display()),
        );

        let args = vec![OsString::from("--port"), OsString::from("4567")];
        assert_eq!(ProcessRunner.run(&script, &args).unwrap(), 0);
        assert_eq!(fs::read_to_string(&out).unwrap(), "--port\n4567\n");
    }

    #[test]
    fn test_missing_script_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("listen.sh");

        let err = ProcessRunner.run(&script, &[]).unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_signal_maps_to_shell_convention() {
        // Raw wait status for "killed by SIGKILL"
        let status = ExitStatus::from_raw(9);
        assert_eq!(exit_code_of(status), 137);
    }
}
