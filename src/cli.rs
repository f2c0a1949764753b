//! CLI argument parsing and tool dispatch

pub mod args;
pub mod dispatch;

// Re-export types for convenient access
pub use args::{ParsedInvocation, Tool, parse, usage};
pub use dispatch::{BANNER, Dispatcher};
