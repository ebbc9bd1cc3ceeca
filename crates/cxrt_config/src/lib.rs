//! Parsing and validation of `cxrt.toml` tool configuration files.
//!
//! The hashing and cache libraries take no configuration. This crate only serves
//! front ends such as `cxhash`, turning the optional config file into a
//! strongly-typed [`ToolConfig`] with every field defaulted.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
