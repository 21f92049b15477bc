//! Report command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::kconfig::load_tree;
use crate::render::Printer;
use crate::snapshot::fold_snapshot_files;
use crate::tree::ReportTree;

#[derive(Args)]
pub struct ReportArgs {
    /// Defconfig snapshot files to load
    #[arg(value_name = "DEFCONFIG")]
    pub load_files: Vec<PathBuf>,

    /// Serialized menu tree produced by the Kconfig front-end
    #[arg(short = 't', long, value_name = "FILE")]
    pub tree: PathBuf,

    /// Preload defconfig files, tried in order; each fully replaces the previous
    #[arg(short = 'p', long = "preload", value_name = "FILE")]
    pub preload: Vec<PathBuf>,

    /// Merge defconfig files over the loaded state
    #[arg(short = 'm', long = "merge", value_name = "FILE")]
    pub merge: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to config file (default: discover defconfig-report.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Draw separator rules around prompt banners
    #[arg(long)]
    pub separator: bool,

    /// Print help text under each prompt
    #[arg(long)]
    pub with_help: bool,

    /// Echo the canonical set/unset line even for options without a match
    #[arg(long)]
    pub with_orig_config: bool,

    /// Print the declaring Kconfig file and line under each prompt
    #[arg(long)]
    pub with_location: bool,

    /// Print comment blocks preceding matched assignments
    #[arg(long)]
    pub with_comment: bool,

    /// Width of separator rules
    #[arg(long, value_name = "N")]
    pub max_column: Option<usize>,

    /// First renderable nesting level
    #[arg(long, value_name = "N")]
    pub first_level: Option<usize>,
}

pub fn run(args: ReportArgs) -> Result<()> {
    let kconf = load_tree(&args.tree)?;

    // Config discovery looks beside the tree file first, then in the cwd.
    let mut search_dirs = Vec::new();
    if let Some(dir) = args.tree.parent() {
        if dir.as_os_str().is_empty() {
            search_dirs.push(PathBuf::from("."));
        } else {
            search_dirs.push(dir.to_path_buf());
        }
    }
    search_dirs.push(std::env::current_dir().context("Failed resolving current directory")?);
    let file_config = load_config(&search_dirs, args.config.as_deref())?;
    let overrides = CliOverrides {
        first_level: args.first_level,
        max_column: args.max_column,
        separator: args.separator,
        with_comment: args.with_comment,
        with_help: args.with_help,
        with_orig_config: args.with_orig_config,
        with_location: args.with_location,
    };
    let opts = merge_cli_with_config(&file_config, &overrides);

    let table = fold_snapshot_files(&kconf, &args.preload, &args.load_files, &args.merge)?;
    let tree = ReportTree::build(&kconf, &table, opts.first_level);
    let printer = Printer::new(&kconf, &tree, &opts);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed creating output file: {}", path.display()))?;
            let mut out = BufWriter::new(file);
            printer.print(&mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            printer.print(&mut out)?;
        }
    }
    Ok(())
}
