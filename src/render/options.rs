//! Render options

/// Everything the template generator and printer can be configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Shallowest level that prints structural decoration. With the default
    /// of 1, the report starts at the root's direct children.
    pub first_level: usize,
    /// Width of generated separator rules.
    pub max_column: usize,
    /// Emit comment blocks attached to matched assignments.
    pub comment: bool,
    /// Emit help text for nodes that declare it.
    pub help: bool,
    /// Echo the canonical set/unset form even without a matched assignment.
    pub orig_config: bool,
    /// Emit the declaring file and line for each visible node.
    pub location: bool,
    /// Indent unit for prompt banners, repeated per level.
    pub prompt_indent: String,
    /// Indent unit for separator rules, repeated per level.
    pub separator_indent: String,
    /// Indent unit for informational blocks, repeated per level.
    pub info_indent: String,
    /// Separator rule glyphs, indexed by depth starting at `first_level`.
    /// Depths past the end of the list draw no rule.
    pub separators: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            first_level: 1,
            max_column: 80,
            comment: false,
            help: false,
            orig_config: false,
            location: false,
            prompt_indent: "#".to_string(),
            separator_indent: "#".to_string(),
            info_indent: "#".to_string(),
            separators: Vec::new(),
        }
    }
}
