//! JSON syntax coloring as class-annotated HTML spans.

use std::sync::OnceLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;

use crate::html::escape_html;

/// Wraps JSON lexical tokens in style-tagged spans.
///
/// Implementations must HTML-escape the text and preserve line boundaries:
/// the output has exactly as many newline-delimited segments as the input,
/// so the renderer can number lines by splitting on `\n`.
pub trait Colorize {
    fn colorize(&self, text: &str) -> String;
}

/// Lazy-initialized syntect highlighting assets (loaded once per process).
fn syntax_set() -> &'static SyntaxSet {
    static ASSETS: OnceLock<SyntaxSet> = OnceLock::new();
    ASSETS.get_or_init(SyntaxSet::load_defaults_newlines)
}

/// Classed-span colorizer backed by syntect's JSON grammar.
///
/// Spans carry class names only; the theme CSS the renderer embeds supplies
/// the colors, so colorized markup is theme-independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonColorizer;

impl JsonColorizer {
    pub fn new() -> Self {
        Self
    }

    fn colorize_line(&self, line: &str) -> String {
        let set = syntax_set();
        let syntax = set
            .find_syntax_by_token("json")
            .unwrap_or_else(|| set.find_syntax_plain_text());
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, set, ClassStyle::Spaced);
        let with_newline = format!("{line}\n");
        if generator
            .parse_html_for_line_which_includes_newline(&with_newline)
            .is_err()
        {
            return escape_html(line);
        }
        // The appended newline is the only literal newline in the output;
        // everything else arrives escaped.
        generator.finalize().replace('\n', "")
    }
}

impl Colorize for JsonColorizer {
    fn colorize(&self, text: &str) -> String {
        let lines: Vec<String> = text.split('\n').map(|l| self.colorize_line(l)).collect();
        lines.join("\n")
    }
}
