//! Defconfig snapshot loading and folding
//!
//! A snapshot file is plain text, one directive per line: assignments
//! (`CONFIG_FOO=y`), explicit unsets (`# CONFIG_FOO is not set`), and
//! comments. The loader turns one file into ordered [`AssignmentRecord`]s;
//! the table folds records from several files under replace-vs-merge
//! semantics.

pub mod loader;
pub mod table;

pub use loader::{load_snapshot, scan_lines};
pub use table::AssignmentTable;

use crate::kconfig::{Kconfig, SymbolId};
use anyhow::Result;
use std::path::PathBuf;

/// One assignment or explicit unset, as read from a snapshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecord {
    /// Option name without the `CONFIG_` prefix.
    pub name: String,
    /// The source line, verbatim (trailing whitespace stripped).
    pub line: String,
    /// Matching symbol, if the menu tree knows the name and the symbol
    /// declares at least one location.
    pub symbol: Option<SymbolId>,
    /// Contiguous comment lines immediately preceding this assignment,
    /// newline-joined. Empty when there were none.
    pub comment: String,
}

/// Fold a full preload / load / merge sequence into one table.
///
/// Each preload file folds with replace semantics, so a later preload fully
/// replaces an earlier one (priority order, last wins). The first primary
/// load file clears whatever the preloads left behind; the rest of the load
/// set accumulates. Merge files overwrite only the names they touch.
pub fn fold_snapshot_files(
    kconf: &Kconfig,
    preload: &[PathBuf],
    load: &[PathBuf],
    merge: &[PathBuf],
) -> Result<AssignmentTable> {
    let mut table = AssignmentTable::default();
    for path in preload {
        let records = load_snapshot(path, kconf)?;
        table.fold(records, true);
    }
    for (i, path) in load.iter().enumerate() {
        let records = load_snapshot(path, kconf)?;
        table.fold(records, i == 0);
    }
    for path in merge {
        let records = load_snapshot(path, kconf)?;
        table.fold(records, false);
    }
    tracing::debug!(
        "folded {} option(s) from {} file(s)",
        table.len(),
        preload.len() + load.len() + merge.len()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kconfig::parse_tree;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn sequence_preload_load_merge() {
        let kconf = parse_tree(r#"{"nodes": []}"#).expect("tree");
        let tmp = TempDir::new().expect("tmp");
        let write = |name: &str, body: &str| {
            let path = tmp.path().join(name);
            fs::write(&path, body).expect("write snapshot");
            path
        };
        let pre_a = write("pre_a.conf", "CONFIG_A=1\n");
        let pre_b = write("pre_b.conf", "CONFIG_B=1\n");
        let base = write("base.conf", "CONFIG_X=10\nCONFIG_Y=y\n");
        let extra = write("extra.conf", "CONFIG_Z=y\n");
        let over = write("override.conf", "CONFIG_X=20\n");

        let table = fold_snapshot_files(
            &kconf,
            &[pre_a, pre_b],
            &[base, extra],
            &[over],
        )
        .expect("fold");

        assert!(table.get("A").is_none(), "first preload replaced by second");
        assert!(table.get("B").is_none(), "preload state cleared by the load pass");
        assert_eq!(table.get("X").expect("X").line, "CONFIG_X=20");
        assert_eq!(table.get("Y").expect("Y").line, "CONFIG_Y=y");
        assert_eq!(table.get("Z").expect("Z").line, "CONFIG_Z=y", "load set is cumulative");
    }

    #[test]
    fn unreadable_file_aborts_without_partial_fold() {
        let kconf = parse_tree(r#"{"nodes": []}"#).expect("tree");
        let tmp = TempDir::new().expect("tmp");
        let good = tmp.path().join("good.conf");
        fs::write(&good, "CONFIG_GOOD=y\n").expect("write snapshot");
        let missing = tmp.path().join("missing.conf");

        let err = fold_snapshot_files(&kconf, &[], &[good, missing], &[]).expect_err("must fail");
        assert!(err.to_string().contains("missing.conf"));
    }
}
