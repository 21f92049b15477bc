//! Menu-tree contract for the external Kconfig parser
//!
//! The Kconfig language front-end is a separate program. It parses Kconfig
//! source, evaluates dependency expressions and symbol values, and hands the
//! result to this crate as a serialized menu tree ([`load`]). The types here
//! are the contract both sides agree on: an arena of menu nodes with
//! parent/child/sibling links stored as ids (no ownership cycles, O(depth)
//! ancestor walks), a symbol arena with a name lookup, and per-node metadata
//! (prompt, help, evaluated dependency, declaring file and line).

pub mod load;

pub use load::{load_tree, parse_tree, TreeError};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index of a menu node in the [`Kconfig`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Index of a symbol in the [`Kconfig`] symbol arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub(crate) usize);

/// Evaluated value of a dependency expression.
///
/// The collaborator evaluates each node's dependency against the current
/// configuration and ships the result; this crate only asks "is it positive".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tristate {
    N,
    M,
    #[default]
    Y,
}

impl Tristate {
    pub fn value(self) -> u8 {
        match self {
            Tristate::N => 0,
            Tristate::M => 1,
            Tristate::Y => 2,
        }
    }
}

/// What a menu node holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// A structural `menu "..."` block.
    Menu,
    /// A `comment "..."` entry (plain item: no name, never matched).
    Comment,
    /// A named, assignable option.
    Symbol(SymbolId),
    /// A group of mutually exclusive branches. Choices may be anonymous.
    Choice { name: Option<String> },
}

/// A named option with its value as evaluated by the collaborator.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    value: String,
    /// Menu nodes that declare this symbol. A symbol referenced but never
    /// declared has no nodes and no location.
    pub nodes: Vec<NodeId>,
}

impl Symbol {
    /// Canonical defconfig form of this symbol at its current value, in the
    /// same shape a written-out config file would use.
    pub fn config_string(&self) -> String {
        if self.value.is_empty() || self.value == "n" {
            format!("# CONFIG_{} is not set", self.name)
        } else {
            format!("CONFIG_{}={}", self.name, self.value)
        }
    }
}

/// One node of the menu tree.
#[derive(Debug, Clone)]
pub struct MenuNode {
    pub item: Item,
    pub prompt: Option<String>,
    pub help: Option<String>,
    /// Evaluated dependency for this node.
    pub dep: Tristate,
    /// Declaring Kconfig file and line.
    pub filename: String,
    pub linenr: u32,
    /// `menuconfig` symbols render as menus.
    pub is_menuconfig: bool,
    pub parent: Option<NodeId>,
    /// Head of this node's child chain.
    pub list: Option<NodeId>,
    /// Next sibling.
    pub next: Option<NodeId>,
}

impl MenuNode {
    /// Menu-like nodes open a section: `menu` blocks, `menuconfig` symbols,
    /// and choices (which group their branches the way a menu does).
    pub fn is_menu_like(&self) -> bool {
        matches!(self.item, Item::Menu | Item::Choice { .. }) || self.is_menuconfig
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.item, Item::Choice { .. })
    }

    /// Name under which this node can match a defconfig assignment, if any.
    pub fn match_name<'a>(&'a self, kconf: &'a Kconfig) -> Option<&'a str> {
        match &self.item {
            Item::Symbol(sid) => Some(kconf.symbol(*sid).name.as_str()),
            Item::Choice { name } => name.as_deref(),
            _ => None,
        }
    }
}

/// The whole menu tree plus the symbol table, as handed over by the parser.
#[derive(Debug, Default)]
pub struct Kconfig {
    nodes: Vec<MenuNode>,
    symbols: Vec<Symbol>,
    by_name: HashMap<String, SymbolId>,
    top: Option<NodeId>,
}

impl Kconfig {
    /// Head of the top-level sibling chain.
    pub fn top_node(&self) -> Option<NodeId> {
        self.top
    }

    pub fn node(&self, id: NodeId) -> &MenuNode {
        &self.nodes[id.0]
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0]
    }

    /// Name → symbol lookup, as the snapshot loader uses it.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.by_name.get(name).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn push_symbol(&mut self, name: &str, value: String) -> SymbolId {
        if let Some(&sid) = self.by_name.get(name) {
            return sid;
        }
        let sid = SymbolId(self.symbols.len());
        self.symbols.push(Symbol { name: name.to_string(), value, nodes: Vec::new() });
        self.by_name.insert(name.to_string(), sid);
        sid
    }

    pub(crate) fn push_node(&mut self, node: MenuNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Item::Symbol(sid) = node.item {
            self.symbols[sid.0].nodes.push(id);
        }
        self.nodes.push(node);
        id
    }

    pub(crate) fn set_top(&mut self, top: Option<NodeId>) {
        self.top = top;
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut MenuNode {
        &mut self.nodes[id.0]
    }
}
