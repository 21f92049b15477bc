//! CLI / file / default precedence

use super::FileConfig;
use crate::render::RenderOptions;

/// Render-affecting CLI flags, separated from clap so precedence is testable.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub first_level: Option<usize>,
    pub max_column: Option<usize>,
    /// Installs the standard `["=", "-"]` separator glyph list.
    pub separator: bool,
    pub with_comment: bool,
    pub with_help: bool,
    pub with_orig_config: bool,
    pub with_location: bool,
}

/// Fold the file layer over the defaults, then the CLI layer over that.
/// Boolean CLI flags only ever enable; absent numeric flags defer.
pub fn merge_cli_with_config(file: &FileConfig, cli: &CliOverrides) -> RenderOptions {
    let mut opts = RenderOptions::default();

    if let Some(v) = file.first_level {
        opts.first_level = v;
    }
    if let Some(v) = file.max_column {
        opts.max_column = v;
    }
    if let Some(v) = file.comment {
        opts.comment = v;
    }
    if let Some(v) = file.help {
        opts.help = v;
    }
    if let Some(v) = file.orig_config {
        opts.orig_config = v;
    }
    if let Some(v) = file.location {
        opts.location = v;
    }
    if let Some(v) = &file.prompt_indent {
        opts.prompt_indent = v.clone();
    }
    if let Some(v) = &file.separator_indent {
        opts.separator_indent = v.clone();
    }
    if let Some(v) = &file.info_indent {
        opts.info_indent = v.clone();
    }
    if let Some(v) = &file.separators {
        opts.separators = v.clone();
    }

    if let Some(v) = cli.first_level {
        opts.first_level = v;
    }
    if let Some(v) = cli.max_column {
        opts.max_column = v;
    }
    if cli.separator {
        opts.separators = vec!["=".to_string(), "-".to_string()];
    }
    opts.comment |= cli.with_comment;
    opts.help |= cli.with_help;
    opts.orig_config |= cli.with_orig_config;
    opts.location |= cli.with_location;

    opts
}
