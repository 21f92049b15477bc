//! Assignment table folding

use super::AssignmentRecord;
use std::collections::HashMap;

/// Name-keyed accumulation of assignment records across snapshot files.
///
/// `fold` with `replace=true` clears the table first (full replacement);
/// with `replace=false` it overwrites only the names the new records touch
/// (merge-over). `by_name` always reflects the last-applied record for each
/// name; `ordered` keeps names in first-encounter order for debugging output.
#[derive(Debug, Default)]
pub struct AssignmentTable {
    by_name: HashMap<String, AssignmentRecord>,
    ordered: Vec<String>,
}

impl AssignmentTable {
    /// Fold one file's records into the table.
    ///
    /// Pure function of (current table, records, replace); never consults
    /// the menu tree.
    pub fn fold(&mut self, records: Vec<AssignmentRecord>, replace: bool) {
        if replace {
            self.by_name.clear();
            self.ordered.clear();
        }
        for record in records {
            if !self.by_name.contains_key(&record.name) {
                self.ordered.push(record.name.clone());
            }
            self.by_name.insert(record.name.clone(), record);
        }
    }

    pub fn get(&self, name: &str) -> Option<&AssignmentRecord> {
        self.by_name.get(name)
    }

    /// Records in the order their names were first encountered.
    pub fn iter(&self) -> impl Iterator<Item = &AssignmentRecord> {
        self.ordered.iter().filter_map(|name| self.by_name.get(name))
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
