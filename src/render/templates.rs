//! Per-level template generation
//!
//! Every renderable section gets one precomputed string per nesting level,
//! with `{prompt}`-style placeholders left in place for the printer to
//! substitute. Nothing beyond substitution happens at print time.

use super::RenderOptions;
use unicode_width::UnicodeWidthChar;

/// Precomputed templates, one entry per level from 0 to the deepest level
/// observed in the annotated tree.
#[derive(Debug)]
pub struct LevelTemplates {
    pub prompt: Vec<String>,
    pub menu_end: Vec<String>,
    pub help: Vec<String>,
    pub help_line: Vec<String>,
    pub orig_config: Vec<String>,
    pub location: Vec<String>,
}

impl LevelTemplates {
    pub fn generate(opts: &RenderOptions, level_count: usize) -> Self {
        let mut glyphs = vec![String::new(); level_count];
        for (offset, glyph) in opts.separators.iter().enumerate() {
            let level = opts.first_level + offset;
            if level >= level_count {
                break;
            }
            glyphs[level] = glyph.clone();
        }

        let mut templates = LevelTemplates {
            prompt: Vec::with_capacity(level_count),
            menu_end: Vec::with_capacity(level_count),
            help: Vec::with_capacity(level_count),
            help_line: Vec::with_capacity(level_count),
            orig_config: Vec::with_capacity(level_count),
            location: Vec::with_capacity(level_count),
        };
        for level in 0..level_count {
            let prompt_indent = opts.prompt_indent.repeat(level);
            let separator_indent = opts.separator_indent.repeat(level);
            let info_indent = opts.info_indent.repeat(level);
            let rule = if glyphs[level].is_empty() {
                String::new()
            } else {
                glyphs[level].repeat(opts.max_column)
            };
            let separator = truncate_columns(
                &format!("{separator_indent} {rule}"),
                opts.max_column.saturating_sub(1),
            );

            templates
                .prompt
                .push(format!("#{separator}\n#{prompt_indent} {{prompt}}\n#{separator}"));
            templates.menu_end.push(format!("#{prompt_indent} end of {{prompt}}\n"));
            templates.help.push(format!("#{info_indent} help\n{{help}}\n#{info_indent}"));
            templates.help_line.push(format!("#{info_indent}     {{help_line}}"));
            templates.orig_config.push(format!("#{info_indent} {{config}}"));
            templates
                .location
                .push(format!("#{info_indent} {{filename}} : {{linenr}}\n#{info_indent}"));
        }
        templates
    }
}

/// Truncate to at most `width` display columns.
fn truncate_columns(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_rule_fills_width_minus_one() {
        let opts = RenderOptions {
            separators: vec!["=".to_string()],
            max_column: 10,
            ..RenderOptions::default()
        };
        let templates = LevelTemplates::generate(&opts, 3);
        // Level 1 gets the first glyph: "#" + "# " + rule, truncated to 9 cols.
        let first_line = templates.prompt[1].lines().next().expect("line");
        assert_eq!(first_line, "## =======");
        assert_eq!(first_line.chars().count(), 10);
    }

    #[test]
    fn levels_without_glyph_draw_no_rule() {
        let opts = RenderOptions {
            separators: vec!["=".to_string(), "-".to_string()],
            ..RenderOptions::default()
        };
        let templates = LevelTemplates::generate(&opts, 4);
        // Level 0 is above first_level, level 3 past the glyph list.
        assert_eq!(templates.prompt[0].lines().next().expect("line"), "# ");
        assert!(templates.prompt[2].contains('-'));
        assert_eq!(templates.prompt[3].lines().next().expect("line"), "#### ");
    }

    #[test]
    fn indent_tracks_are_independent() {
        let opts = RenderOptions {
            prompt_indent: ">".to_string(),
            info_indent: "*".to_string(),
            ..RenderOptions::default()
        };
        let templates = LevelTemplates::generate(&opts, 3);
        assert_eq!(templates.menu_end[2], "#>> end of {prompt}\n");
        assert_eq!(templates.orig_config[2], "#** {config}");
        assert_eq!(templates.help_line[1], "#*     {help_line}");
    }

    #[test]
    fn placeholders_survive_generation() {
        let templates = LevelTemplates::generate(&RenderOptions::default(), 2);
        assert!(templates.prompt[1].contains("{prompt}"));
        assert!(templates.help[1].contains("{help}"));
        assert!(templates.location[1].contains("{filename}"));
        assert!(templates.location[1].contains("{linenr}"));
    }
}
