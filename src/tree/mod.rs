//! Annotated mirror of the menu tree
//!
//! Walks the collaborator's menu tree depth-first and builds a mirrored tree
//! with the same shape, where each node carries its nesting level, whether a
//! loaded assignment defined it (directly or through a descendant), and the
//! matching record when there is one. The mirror is rebuilt from scratch
//! whenever the assignment table changes.

use crate::kconfig::{Kconfig, NodeId};
use crate::snapshot::{AssignmentRecord, AssignmentTable};

/// Index of a node in the [`ReportTree`] arena.
pub type ReportNodeId = usize;

/// One mirrored node. Links are arena indices; `parent` exists only for
/// upward definedness propagation.
#[derive(Debug)]
pub struct ReportNode {
    /// The mirrored menu node.
    pub ext: NodeId,
    /// Nesting depth, 0 at the top-level chain.
    pub level: usize,
    pub parent: Option<ReportNodeId>,
    /// Head of the child chain.
    pub list: Option<ReportNodeId>,
    /// Next sibling.
    pub next: Option<ReportNodeId>,
    /// True when this node's own name matched an assignment with a satisfied
    /// dependency, or when any descendant did.
    pub defined: bool,
    /// The record that defined this node directly. Absent for nodes defined
    /// only through a descendant.
    pub assignment: Option<AssignmentRecord>,
}

/// The mirrored, annotated tree.
#[derive(Debug, Default)]
pub struct ReportTree {
    nodes: Vec<ReportNode>,
    top: Option<ReportNodeId>,
    /// Deepest level observed; the printer precomputes `max_level + 1`
    /// template sets.
    pub max_level: usize,
}

impl ReportTree {
    /// Mirror the menu tree against the folded table. The top-level chain
    /// starts at `first_level`, so template depths line up with the
    /// configured first renderable level.
    pub fn build(kconf: &Kconfig, table: &AssignmentTable, first_level: usize) -> Self {
        let mut tree = ReportTree::default();
        tree.top = tree.build_chain(kconf, table, kconf.top_node(), None, first_level);
        tree
    }

    /// Head of the top-level sibling chain.
    pub fn top_node(&self) -> Option<ReportNodeId> {
        self.top
    }

    pub fn node(&self, id: ReportNodeId) -> &ReportNode {
        &self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn build_chain(
        &mut self,
        kconf: &Kconfig,
        table: &AssignmentTable,
        head: Option<NodeId>,
        parent: Option<ReportNodeId>,
        level: usize,
    ) -> Option<ReportNodeId> {
        let mut first = None;
        let mut prev: Option<ReportNodeId> = None;
        let mut ext = head;
        while let Some(ext_id) = ext {
            let menu_node = kconf.node(ext_id);
            let id = self.nodes.len();
            self.nodes.push(ReportNode {
                ext: ext_id,
                level,
                parent,
                list: None,
                next: None,
                defined: false,
                assignment: None,
            });
            // Dependency gating applies only at the matched node; ancestors
            // propagate unconditionally once any descendant matches.
            if menu_node.dep.value() > 0 {
                if let Some(name) = menu_node.match_name(kconf) {
                    if let Some(record) = table.get(name) {
                        self.nodes[id].defined = true;
                        self.nodes[id].assignment = Some(record.clone());
                        self.propagate_defined(parent);
                    }
                }
            }
            if menu_node.list.is_some() {
                let list = self.build_chain(kconf, table, menu_node.list, Some(id), level + 1);
                self.nodes[id].list = list;
            }
            match prev {
                Some(p) => self.nodes[p].next = Some(id),
                None => first = Some(id),
            }
            prev = Some(id);
            ext = menu_node.next;
        }
        if self.max_level < level {
            self.max_level = level;
        }
        first
    }

    /// Walk the parent chain marking ancestors defined, stopping at the
    /// first already-defined one.
    fn propagate_defined(&mut self, mut parent: Option<ReportNodeId>) {
        while let Some(p) = parent {
            if self.nodes[p].defined {
                break;
            }
            self.nodes[p].defined = true;
            parent = self.nodes[p].parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kconfig::parse_tree;
    use crate::snapshot::scan_lines;

    fn table_for(kconf: &Kconfig, snapshot: &str) -> AssignmentTable {
        let mut table = AssignmentTable::default();
        table.fold(scan_lines(snapshot, kconf), true);
        table
    }

    const NESTED: &str = r#"{"nodes": [
        {"item": "menu", "prompt": "Devices", "children": [
            {"item": "menu", "prompt": "Network", "children": [
                {"item": {"symbol": {"name": "ETH", "value": "y"}}, "prompt": "Ethernet"},
                {"item": {"symbol": {"name": "WIFI", "value": "n"}}, "prompt": "Wireless"}
            ]},
            {"item": {"symbol": {"name": "USB", "value": "n"}}, "prompt": "USB"}
        ]},
        {"item": "comment", "prompt": "unrelated"}
    ]}"#;

    #[test]
    fn shape_matches_menu_tree() {
        let kconf = parse_tree(NESTED).expect("tree");
        let tree = ReportTree::build(&kconf, &AssignmentTable::default(), 0);
        assert_eq!(tree.node_count(), kconf.node_count());

        let devices = tree.top_node().expect("top");
        assert_eq!(tree.node(devices).level, 0);
        let network = tree.node(devices).list.expect("child");
        assert_eq!(tree.node(network).level, 1);
        let eth = tree.node(network).list.expect("grandchild");
        assert_eq!(tree.node(eth).level, 2);
        let wifi = tree.node(eth).next.expect("sibling order kept");
        assert!(tree.node(wifi).next.is_none());
        let usb = tree.node(network).next.expect("usb after network");
        assert!(tree.node(usb).next.is_none());
        assert_eq!(tree.max_level, 2);
    }

    #[test]
    fn match_propagates_to_every_strict_ancestor() {
        let kconf = parse_tree(NESTED).expect("tree");
        let table = table_for(&kconf, "CONFIG_ETH=y\n");
        let tree = ReportTree::build(&kconf, &table, 0);

        let devices = tree.top_node().expect("top");
        let network = tree.node(devices).list.expect("network");
        let eth = tree.node(network).list.expect("eth");
        let wifi = tree.node(eth).next.expect("wifi");
        let usb = tree.node(network).next.expect("usb");

        assert!(tree.node(eth).defined);
        assert!(tree.node(eth).assignment.is_some());
        assert!(tree.node(network).defined, "ancestor defined transitively");
        assert!(tree.node(network).assignment.is_none(), "structural definedness only");
        assert!(tree.node(devices).defined);
        assert!(!tree.node(wifi).defined);
        assert!(!tree.node(usb).defined);
    }

    #[test]
    fn unsatisfied_dependency_blocks_own_match() {
        let kconf = parse_tree(
            r#"{"nodes": [
                {"item": "menu", "prompt": "M", "children": [
                    {"item": {"symbol": {"name": "GATED", "value": "y"}}, "dep": "n"}
                ]}
            ]}"#,
        )
        .expect("tree");
        let table = table_for(&kconf, "CONFIG_GATED=y\n");
        let tree = ReportTree::build(&kconf, &table, 0);

        let menu = tree.top_node().expect("top");
        let gated = tree.node(menu).list.expect("gated");
        assert!(!tree.node(gated).defined, "dep=n never matches its own assignment");
        assert!(!tree.node(menu).defined);
    }

    #[test]
    fn gated_ancestor_still_propagates_from_descendant() {
        let kconf = parse_tree(
            r#"{"nodes": [
                {"item": "menu", "prompt": "M", "dep": "n", "children": [
                    {"item": {"symbol": {"name": "LEAF", "value": "y"}}}
                ]}
            ]}"#,
        )
        .expect("tree");
        let table = table_for(&kconf, "CONFIG_LEAF=y\n");
        let tree = ReportTree::build(&kconf, &table, 0);

        let menu = tree.top_node().expect("top");
        assert!(tree.node(menu).defined, "propagation ignores ancestor deps");
    }

    #[test]
    fn named_choice_matches_assignment() {
        let kconf = parse_tree(
            r#"{"nodes": [
                {"item": {"choice": {"name": "CPU_MODE"}}, "prompt": "CPU mode", "children": [
                    {"item": {"symbol": {"name": "LITTLE", "value": "y"}}},
                    {"item": {"symbol": {"name": "BIG", "value": "n"}}}
                ]}
            ]}"#,
        )
        .expect("tree");
        let table = table_for(&kconf, "CONFIG_CPU_MODE=y\n");
        let tree = ReportTree::build(&kconf, &table, 0);

        let choice = tree.top_node().expect("choice");
        assert!(tree.node(choice).defined);
        assert!(tree.node(choice).assignment.is_some());
    }

    #[test]
    fn max_level_stops_at_the_deepest_real_node() {
        let kconf = parse_tree(r#"{"nodes": [{"item": {"symbol": {"name": "LONE", "value": "y"}}}]}"#)
            .expect("tree");

        let tree = ReportTree::build(&kconf, &AssignmentTable::default(), 0);
        assert_eq!(tree.max_level, 0, "a single leaf chain observes only its own level");

        let offset = ReportTree::build(&kconf, &AssignmentTable::default(), 1);
        assert_eq!(offset.max_level, 1);
    }

    #[test]
    fn empty_table_leaves_everything_undefined() {
        let kconf = parse_tree(NESTED).expect("tree");
        let tree = ReportTree::build(&kconf, &AssignmentTable::default(), 0);
        for id in 0..tree.node_count() {
            assert!(!tree.node(id).defined);
        }
    }
}
