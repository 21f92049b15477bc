//! Config file loading

use super::FileConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Load the render-option config file.
///
/// Auto-discovery checks each search directory in order and the first hit
/// wins. An explicitly named file must parse, or the run fails; an
/// auto-discovered file that fails to parse is only warned about, and
/// defaults apply.
pub fn load_config(search_dirs: &[PathBuf], config_path: Option<&Path>) -> Result<FileConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dirs),
    };

    let Some(config_file) = discovered else {
        return Ok(FileConfig::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    match parse_toml_config(&content, &config_file) {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            if config_path_provided {
                return Err(e);
            }
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {}",
                config_file.display(),
                e
            );
            Ok(FileConfig::default())
        }
    }
}

fn parse_toml_config(content: &str, config_file: &Path) -> Result<FileConfig> {
    toml::from_str(content)
        .with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

fn discover_config(search_dirs: &[PathBuf]) -> Option<PathBuf> {
    let candidates = ["defconfig-report.toml", ".defconfig-report.toml"];
    for dir in search_dirs {
        for candidate in candidates {
            let path = dir.join(candidate);
            if path.exists() {
                return Some(path);
            }
        }
    }
    None
}
