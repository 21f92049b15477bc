//! Snapshot file scanning

use super::AssignmentRecord;
use crate::kconfig::Kconfig;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static SET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CONFIG_([A-Za-z0-9_]+)=(.*)$").expect("valid regex"));

static UNSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^# CONFIG_([A-Za-z0-9_]+) is not set$").expect("valid regex"));

/// Read one snapshot file into ordered records.
///
/// The whole file is read before any record is produced, so a read failure
/// never yields a partial fold.
pub fn load_snapshot(path: &Path, kconf: &Kconfig) -> Result<Vec<AssignmentRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading snapshot file: {}", path.display()))?;
    Ok(scan_lines(&content, kconf))
}

/// Scan snapshot text into ordered records.
///
/// Comment lines accumulate into a pending buffer that attaches to the next
/// assignment; any other non-matching line clears the buffer. The unset
/// pattern is tested before the generic comment pattern, since it also
/// starts with `#`.
pub fn scan_lines(content: &str, kconf: &Kconfig) -> Vec<AssignmentRecord> {
    let mut records = Vec::new();
    let mut comment_lines: Vec<&str> = Vec::new();
    for raw in content.lines() {
        let line = raw.trim_end();
        let name = if let Some(caps) = SET_RE.captures(line) {
            caps.get(1).map(|m| m.as_str())
        } else if let Some(caps) = UNSET_RE.captures(line) {
            caps.get(1).map(|m| m.as_str())
        } else {
            if line.starts_with('#') {
                comment_lines.push(line);
            } else {
                comment_lines.clear();
            }
            continue;
        };
        let Some(name) = name else { continue };
        let symbol = kconf.lookup(name).filter(|&sid| !kconf.symbol(sid).nodes.is_empty());
        if symbol.is_none() {
            tracing::debug!("snapshot sets unknown option CONFIG_{}", name);
        }
        records.push(AssignmentRecord {
            name: name.to_string(),
            line: line.to_string(),
            symbol,
            comment: comment_lines.join("\n"),
        });
        comment_lines.clear();
    }
    records
}
