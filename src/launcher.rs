//! Locating and running the per-tool launcher scripts

pub mod runner;
pub mod script;

pub use runner::{ProcessRunner, ScriptRunner};
pub use script::{Platform, executable_dir, resolve_script_path};
