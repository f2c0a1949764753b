#![forbid(unsafe_code)]

//! Tool dispatch: summary output and launcher script invocation

use crate::cli::args::{ParsedInvocation, Tool};
use crate::error::LaunchError;
use crate::launcher::{Platform, ScriptRunner, resolve_script_path};
use crate::output::Console;
use log::debug;
use std::path::PathBuf;
use termcolor::WriteColor;

/// Banner printed before the summary
pub const BANNER: &str = "ADA Scanner CLI Launcher";

/// Hands a parsed invocation to the matching launcher script
pub struct Dispatcher<R> {
    script_dir: PathBuf,
    platform: Platform,
    banner: bool,
    runner: R,
}

impl<R: ScriptRunner> Dispatcher<R> {
    /// Creates a dispatcher for scripts in `script_dir` on the host platform
    pub fn new(script_dir: impl Into<PathBuf>, runner: R) -> Self {
        Dispatcher {
            script_dir: script_dir.into(),
            platform: Platform::host(),
            banner: true,
            runner,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Print the summary for `invocation`, run its script and return the
    /// script's exit code unchanged
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Spawn`] if the script cannot be started and
    /// [`LaunchError::Io`] if the console cannot be written.
    pub fn dispatch<O, E>(
        &mut self,
        invocation: &ParsedInvocation,
        console: &mut Console<O, E>,
    ) -> Result<i32, LaunchError>
    where
        O: WriteColor,
        E: WriteColor,
    {
        if self.banner {
            console.banner(BANNER)?;
        }
        console.field("Selected tool", invocation.tool.as_str())?;

        // A new Tool variant needs its own arm here; a tool without a script
        // reports "Unknown tool: <tool> (expected listen or sca)." and returns EXIT_USAGE
        match invocation.tool {
            Tool::Sca => {
                if invocation.has_listener_flags() {
                    console.warning("Warning: --port/--headless ignored for sca.")?;
                }
                let args = if invocation.passthrough_args.is_empty() {
                    "(none)".to_string()
                } else {
                    invocation
                        .passthrough_args
                        .iter()
                        .map(|arg| arg.to_string_lossy())
                        .collect::<Vec<_>>()
                        .join(" ")
                };
                console.field("Static analysis args", &args)?;
            }
            Tool::Listen => {
                console.field(
                    "Port override",
                    invocation.port.as_deref().unwrap_or("(default)"),
                )?;
                console.field(
                    "Headless",
                    if invocation.headless {
                        "enabled (monitoring console disabled)."
                    } else {
                        "disabled"
                    },
                )?;
            }
        }

        let script = resolve_script_path(&self.script_dir, invocation.tool, self.platform);
        let args = invocation.forwarded_args();
        debug!("resolved {} script at {}", invocation.tool, script.display());

        console.flush()?;
        self.runner.run(&script, &args)
    }
}
