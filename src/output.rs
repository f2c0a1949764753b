//! Console output for the launcher summary, warnings and errors

pub mod human;

pub use human::{Console, StandardConsole};
