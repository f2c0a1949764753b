#![forbid(unsafe_code)]

//! ADA Scanner launcher: selects the listener or the static analysis tool
//!
//! The launcher parses a small set of flags, prints a summary of what it
//! resolved, and hands the remaining work to a platform launcher script
//! that lives next to the executable.

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod output;

pub use cli::{Dispatcher, ParsedInvocation, Tool, parse, usage};
pub use error::LaunchError;
