#![forbid(unsafe_code)]

//! Command-line token scanner
//!
//! The launcher's flags are few but the grammar is not something a derive
//! parser expresses well: `--tool sca` switches the scanner into
//! passthrough mode, so every token after it is forwarded untouched even
//! if it looks like one of our own flags.

use crate::error::LaunchError;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::str::FromStr;

/// One-line usage text shown with `--help` and after argument errors
pub fn usage() -> &'static str {
    "Usage: ada-launcher [-p|--port <port>] [-h|--headless] [-t|--tool <listen|sca>] [-- <sca args>]"
}

/// The sub-tool the launcher hands off to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    /// Network listener service
    #[default]
    Listen,
    /// Static code analysis
    Sca,
}

impl Tool {
    /// Name used on the command line and as the launcher script's base name
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Listen => "listen",
            Tool::Sca => "sca",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "listen" => Ok(Tool::Listen),
            "sca" => Ok(Tool::Sca),
            other => Err(LaunchError::UnknownTool(other.to_string())),
        }
    }
}

/// Fully resolved command line for a single run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedInvocation {
    pub tool: Tool,
    /// Port override, guaranteed to be ASCII digits when present
    pub port: Option<String>,
    pub headless: bool,
    /// Arguments forwarded verbatim to the sca script, including bytes
    /// that are not valid UTF-8
    pub passthrough_args: Vec<OsString>,
}

impl ParsedInvocation {
    /// True if a listener-only flag was given
    pub fn has_listener_flags(&self) -> bool {
        self.port.is_some() || self.headless
    }

    /// Arguments forwarded to the listen script
    pub fn listen_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if let Some(port) = &self.port {
            args.push(OsString::from("--port"));
            args.push(OsString::from(port));
        }
        if self.headless {
            args.push(OsString::from("--headless"));
        }
        args
    }

    /// Arguments for the script of the selected tool
    pub fn forwarded_args(&self) -> Vec<OsString> {
        match self.tool {
            Tool::Listen => self.listen_args(),
            Tool::Sca => self.passthrough_args.clone(),
        }
    }
}

/// Scanner state before validation
#[derive(Default)]
struct RawInvocation {
    tool: Option<Tool>,
    port: Option<OsString>,
    headless: bool,
    passthrough_args: Vec<OsString>,
}

/// Parse command-line tokens (without the program name)
///
/// Tokens are kept as `OsString` so passthrough arguments reach the sca
/// script byte for byte. Our own flags and values must be UTF-8.
///
/// # Errors
///
/// Returns [`LaunchError::HelpRequested`] when `--help` is seen, and an
/// invalid-argument error for a missing flag value, an unknown option, an
/// unknown tool, or a non-numeric port.
pub fn parse<I, S>(args: I) -> Result<ParsedInvocation, LaunchError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let tokens: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let raw = scan(&tokens)?;

    let port = match raw.port {
        Some(port) => match port.to_str().filter(|p| is_port_number(p)) {
            Some(digits) => Some(digits.to_string()),
            None => return Err(LaunchError::InvalidPort(port.to_string_lossy().into_owned())),
        },
        None => None,
    };

    Ok(ParsedInvocation {
        tool: raw.tool.unwrap_or_default(),
        port,
        headless: raw.headless,
        passthrough_args: raw.passthrough_args,
    })
}

fn scan(tokens: &[OsString]) -> Result<RawInvocation, LaunchError> {
    let mut raw = RawInvocation::default();
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];
        match token.to_str() {
            Some(flag @ ("-t" | "--tool")) => {
                let value = flag_value(tokens, index, flag)?;
                let tool: Tool = match value.to_str() {
                    Some(name) => name.parse()?,
                    None => {
                        return Err(LaunchError::UnknownTool(
                            value.to_string_lossy().into_owned(),
                        ));
                    }
                };
                raw.tool = Some(tool);
                index += 2;

                if tool == Tool::Sca {
                    let mut rest = &tokens[index..];
                    if rest.first().is_some_and(|t| t == "--") {
                        rest = &rest[1..];
                    }
                    raw.passthrough_args = rest.to_vec();
                    return Ok(raw);
                }
            }
            Some(flag @ ("-p" | "--port")) => {
                raw.port = Some(flag_value(tokens, index, flag)?.to_os_string());
                index += 2;
            }
            Some("-h" | "--headless") => {
                raw.headless = true;
                index += 1;
            }
            Some("--help") => return Err(LaunchError::HelpRequested),
            Some("--") => {
                raw.passthrough_args = tokens[index + 1..].to_vec();
                return Ok(raw);
            }
            _ => {
                return Err(LaunchError::UnknownOption(
                    token.to_string_lossy().into_owned(),
                ));
            }
        }
    }

    Ok(raw)
}

fn flag_value<'a>(
    tokens: &'a [OsString],
    index: usize,
    flag: &str,
) -> Result<&'a OsStr, LaunchError> {
    tokens
        .get(index + 1)
        .map(OsString::as_os_str)
        .ok_or_else(|| LaunchError::MissingValue {
            flag: flag.to_string(),
        })
}

fn is_port_number(port: &str) -> bool {
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}
