//! Configuration file parsing and script directory resolution

pub mod launcher_toml;

pub use launcher_toml::{
    CONFIG_FILE_NAME, ColorOption, Config, OutputConfig, SCRIPT_DIR_ENV, ScriptsConfig,
};
