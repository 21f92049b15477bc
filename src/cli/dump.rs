//! Dump command implementation
//!
//! Prints the folded assignment table in the order names were first
//! encountered, after the full preload / load / merge sequence. Useful for
//! checking what a fold actually committed before rendering anything.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::kconfig::load_tree;
use crate::snapshot::fold_snapshot_files;

#[derive(Args)]
pub struct DumpArgs {
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
}

pub fn run(args: DumpArgs) -> Result<()> {
    let kconf = load_tree(&args.tree)?;
    let table = fold_snapshot_files(&kconf, &args.preload, &args.load_files, &args.merge)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in table.iter() {
        let known = if record.symbol.is_some() { "" } else { "\t# unknown option" };
        writeln!(out, "{}{}", record.line, known)?;
    }
    Ok(())
}
