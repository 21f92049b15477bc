//! Annotated-tree printing
//!
//! Single depth-first pass over the annotated tree; undefined subtrees are
//! skipped unless forced. All output, informational blocks included, goes
//! through the one configured sink.

use super::{LevelTemplates, RenderOptions};
use crate::kconfig::{Item, Kconfig};
use crate::tree::{ReportNodeId, ReportTree};
use std::io::{self, Write};

pub struct Printer<'a> {
    kconf: &'a Kconfig,
    tree: &'a ReportTree,
    opts: &'a RenderOptions,
    templates: LevelTemplates,
}

impl<'a> Printer<'a> {
    pub fn new(kconf: &'a Kconfig, tree: &'a ReportTree, opts: &'a RenderOptions) -> Self {
        let templates = LevelTemplates::generate(opts, tree.max_level + 1);
        Printer { kconf, tree, opts, templates }
    }

    /// Print the whole report.
    pub fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_chain(self.tree.top_node(), false, out)
    }

    fn print_chain(
        &self,
        head: Option<ReportNodeId>,
        force: bool,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let mut cur = head;
        while let Some(id) = cur {
            let node = self.tree.node(id);
            if node.defined || force {
                self.print_node(id, force, out)?;
            }
            cur = node.next;
        }
        Ok(())
    }

    fn print_node(&self, id: ReportNodeId, force: bool, out: &mut dyn Write) -> io::Result<()> {
        let node = self.tree.node(id);
        let ext = self.kconf.node(node.ext);
        let level = node.level;
        let mut emitted = false;

        if let Some(prompt) = &ext.prompt {
            writeln!(out, "{}", self.templates.prompt[level].replace("{prompt}", prompt))?;
            emitted = true;
            if self.opts.help {
                if let Some(help) = &ext.help {
                    self.print_help(level, help, out)?;
                }
            }
            if self.opts.location {
                let banner = self.templates.location[level]
                    .replace("{filename}", &ext.filename)
                    .replace("{linenr}", &ext.linenr.to_string());
                writeln!(out, "{banner}")?;
            }
        }

        if self.opts.comment {
            if let Some(record) = &node.assignment {
                if !record.comment.is_empty() {
                    writeln!(out, "{}", record.comment)?;
                    emitted = true;
                }
            }
        }

        if node.assignment.is_some() || self.opts.orig_config || force {
            if let Some(record) = &node.assignment {
                // Round-trip echo: the raw input line, byte for byte.
                writeln!(out, "{}", record.line)?;
                emitted = true;
            } else if let Item::Symbol(sid) = ext.item {
                let config = self.kconf.symbol(sid).config_string();
                let config = config.trim_end().trim_start_matches(|c| c == '#' || c == ' ');
                writeln!(out, "{}", self.templates.orig_config[level].replace("{config}", config))?;
                emitted = true;
            }
        }

        if emitted {
            writeln!(out)?;
        }

        if node.list.is_some() {
            // Once a choice is visible, all of its branches are shown
            // together; other node kinds hand the current flag down.
            let child_force = if ext.is_choice() { true } else { force };
            self.print_chain(node.list, child_force, out)?;
        }

        if ext.is_menu_like() {
            if let Some(prompt) = &ext.prompt {
                writeln!(out, "{}", self.templates.menu_end[level].replace("{prompt}", prompt))?;
            }
        }
        Ok(())
    }

    fn print_help(&self, level: usize, help: &str, out: &mut dyn Write) -> io::Result<()> {
        let lines: Vec<String> = help
            .lines()
            .map(|line| self.templates.help_line[level].replace("{help_line}", line))
            .collect();
        writeln!(out, "{}", self.templates.help[level].replace("{help}", &lines.join("\n")))
    }
}
