//! Render-option configuration
//!
//! Options come from three layers with CLI > file > defaults precedence.
//! The file layer is a TOML file discovered next to the invocation or named
//! explicitly with `--config`.

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

use serde::Deserialize;

/// Partial render options as read from a config file. Absent fields fall
/// back to defaults (or CLI flags).
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub first_level: Option<usize>,
    pub max_column: Option<usize>,
    pub comment: Option<bool>,
    pub help: Option<bool>,
    pub orig_config: Option<bool>,
    pub location: Option<bool>,
    pub prompt_indent: Option<String>,
    pub separator_indent: Option<String>,
    pub info_indent: Option<String>,
    pub separators: Option<Vec<String>>,
}
