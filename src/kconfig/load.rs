//! Serialized menu-tree loading
//!
//! The parser front-end writes its evaluated menu tree as JSON; this module
//! reads that file back into the [`Kconfig`] arena and wires up the
//! parent/child/sibling links.

use super::{Item, Kconfig, MenuNode, NodeId, Tristate};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Structural problems in a serialized tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("symbol with empty name at {filename}:{linenr}")]
    EmptySymbolName { filename: String, linenr: u32 },

    #[error("choice with empty name at {filename}:{linenr} (omit the name instead)")]
    EmptyChoiceName { filename: String, linenr: u32 },
}

/// Wire form of one menu node.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeSpec {
    item: ItemSpec,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    help: Option<String>,
    #[serde(default)]
    dep: Tristate,
    #[serde(default)]
    filename: String,
    #[serde(default)]
    linenr: u32,
    #[serde(default)]
    menuconfig: bool,
    #[serde(default)]
    children: Vec<NodeSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ItemSpec {
    Menu,
    Comment,
    Symbol { name: String, #[serde(default)] value: String },
    Choice { #[serde(default)] name: Option<String> },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TreeSpec {
    nodes: Vec<NodeSpec>,
}

/// Read a serialized menu tree from `path`.
pub fn load_tree(path: &Path) -> Result<Kconfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading menu tree file: {}", path.display()))?;
    parse_tree(&content).with_context(|| format!("Invalid menu tree file: {}", path.display()))
}

/// Parse a serialized menu tree from a JSON string.
pub fn parse_tree(content: &str) -> Result<Kconfig> {
    let spec: TreeSpec = serde_json::from_str(content).context("Invalid menu tree JSON")?;
    let mut kconf = Kconfig::default();
    let top = link_chain(&mut kconf, spec.nodes, None)?;
    kconf.set_top(top);
    Ok(kconf)
}

/// Build one sibling chain, recursing into children; returns the chain head.
fn link_chain(
    kconf: &mut Kconfig,
    specs: Vec<NodeSpec>,
    parent: Option<NodeId>,
) -> Result<Option<NodeId>, TreeError> {
    let mut first = None;
    let mut prev: Option<NodeId> = None;
    for spec in specs {
        let item = match spec.item {
            ItemSpec::Menu => Item::Menu,
            ItemSpec::Comment => Item::Comment,
            ItemSpec::Symbol { name, value } => {
                if name.is_empty() {
                    return Err(TreeError::EmptySymbolName {
                        filename: spec.filename,
                        linenr: spec.linenr,
                    });
                }
                Item::Symbol(kconf.push_symbol(&name, value))
            }
            ItemSpec::Choice { name } => {
                if name.as_deref() == Some("") {
                    return Err(TreeError::EmptyChoiceName {
                        filename: spec.filename,
                        linenr: spec.linenr,
                    });
                }
                Item::Choice { name }
            }
        };
        let id = kconf.push_node(MenuNode {
            item,
            prompt: spec.prompt,
            help: spec.help,
            dep: spec.dep,
            filename: spec.filename,
            linenr: spec.linenr,
            is_menuconfig: spec.menuconfig,
            parent,
            list: None,
            next: None,
        });
        let list = link_chain(kconf, spec.children, Some(id))?;
        kconf.node_mut(id).list = list;
        match prev {
            Some(p) => kconf.node_mut(p).next = Some(id),
            None => first = Some(id),
        }
        prev = Some(id);
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kconfig::Item;

    #[test]
    fn parses_nested_tree_with_links() {
        let kconf = parse_tree(
            r#"{"nodes": [
                {"item": "menu", "prompt": "General setup", "filename": "Kconfig", "linenr": 3,
                 "children": [
                    {"item": {"symbol": {"name": "FOO", "value": "y"}}, "prompt": "Foo option"},
                    {"item": {"symbol": {"name": "BAR"}}, "dep": "n"}
                 ]},
                {"item": "comment", "prompt": "just a comment"}
            ]}"#,
        )
        .expect("parse tree");

        let top = kconf.top_node().expect("top node");
        let menu = kconf.node(top);
        assert_eq!(menu.item, Item::Menu);
        assert_eq!(menu.prompt.as_deref(), Some("General setup"));

        let foo_id = menu.list.expect("menu child");
        let foo = kconf.node(foo_id);
        assert_eq!(foo.parent, Some(top));
        assert_eq!(foo.match_name(&kconf), Some("FOO"));

        let bar_id = foo.next.expect("sibling");
        let bar = kconf.node(bar_id);
        assert_eq!(bar.match_name(&kconf), Some("BAR"));
        assert_eq!(bar.dep.value(), 0);
        assert!(bar.next.is_none());

        let comment_id = menu.next.expect("top sibling");
        assert_eq!(kconf.node(comment_id).item, Item::Comment);

        let foo_sym = kconf.lookup("FOO").expect("FOO known");
        assert_eq!(kconf.symbol(foo_sym).nodes, vec![foo_id]);
    }

    #[test]
    fn rejects_empty_symbol_name() {
        let err = parse_tree(
            r#"{"nodes": [{"item": {"symbol": {"name": ""}}, "filename": "Kconfig", "linenr": 7}]}"#,
        )
        .expect_err("empty name must fail");
        assert!(err.to_string().contains("symbol with empty name at Kconfig:7"));
    }

    #[test]
    fn empty_tree_has_no_top_node() {
        let kconf = parse_tree(r#"{"nodes": []}"#).expect("parse empty");
        assert!(kconf.top_node().is_none());
        assert_eq!(kconf.node_count(), 0);
    }

    #[test]
    fn menuconfig_symbol_is_menu_like() {
        let kconf = parse_tree(
            r#"{"nodes": [{"item": {"symbol": {"name": "NET", "value": "y"}},
                           "prompt": "Networking support", "menuconfig": true}]}"#,
        )
        .expect("parse tree");
        let top = kconf.top_node().expect("top");
        assert!(kconf.node(top).is_menu_like());
        assert!(!kconf.node(top).is_choice());
    }
}
