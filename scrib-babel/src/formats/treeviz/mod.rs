//! Treeviz formatter for the symbol tree
//!
//! Treeviz is a visual representation of parse results, for inspection rather
//! than publishing. It encodes nesting as indentation, two spaces per level,
//! one node per line:
//!
//!     <indentation> <icon><space><label>
//!
//! Runs of raw characters are coalesced into a single text node so a line of
//! prose does not become a hundred rows.
//!
//! Icons:
//!     Document: ⧉
//!     Line: ↵
//!     Text: ◦
//!     Hashtag: #
//!     Link: ⊕
//!     Bold: 𝐁
//!     Strike: −
//!     Underline: ⎵
//!     Empty/unsupported bracket: ∅

use crate::ast::{Bracket, BracketKind, Document, EmphasisKind, Symbol};
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for the treeviz inspection output
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Symbol tree visualization"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}

/// Render the symbol tree of a parsed document.
pub fn to_treeviz_str(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("⧉ document\n");
    for line in &doc.lines {
        out.push_str("  ↵ line\n");
        render_symbols(&line.symbols, 2, &mut out);
    }
    out
}

fn render_symbols(symbols: &[Symbol], depth: usize, out: &mut String) {
    let mut text_run = String::new();
    for symbol in symbols {
        match symbol {
            Symbol::Raw(c) => text_run.push(*c),
            Symbol::Hashtag(hashtag) => {
                flush_text_run(&mut text_run, depth, out);
                push_node(depth, '#', hashtag.raw(), out);
            }
            Symbol::Bracket(bracket) => {
                flush_text_run(&mut text_run, depth, out);
                render_bracket(bracket, depth, out);
            }
        }
    }
    flush_text_run(&mut text_run, depth, out);
}

fn render_bracket(bracket: &Bracket, depth: usize, out: &mut String) {
    let (icon, label) = match bracket.kind {
        BracketKind::Empty | BracketKind::Unsupported => ('∅', bracket.raw.clone()),
        BracketKind::Link => ('⊕', "link".to_string()),
        BracketKind::DoubleBold => ('𝐁', "bold".to_string()),
        BracketKind::Emphasis { kind, level } => {
            let icon = match kind {
                EmphasisKind::Bold => '𝐁',
                EmphasisKind::Strike => '−',
                EmphasisKind::Underline => '⎵',
            };
            (icon, format!("{kind} level-{level}"))
        }
    };
    push_node(depth, icon, &label, out);
    render_symbols(&bracket.symbols, depth + 1, out);
}

fn flush_text_run(text_run: &mut String, depth: usize, out: &mut String) {
    if text_run.is_empty() {
        return;
    }
    push_node(depth, '◦', text_run, out);
    text_run.clear();
}

fn push_node(depth: usize, icon: char, label: &str, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push(icon);
    out.push(' ');
    out.push_str(label);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::scrib::parser::parse_line;

    fn treeviz_of(line: &str) -> String {
        let doc = Document::with_lines(vec![parse_line(line)]);
        to_treeviz_str(&doc)
    }

    #[test]
    fn test_raw_runs_coalesce() {
        let out = treeviz_of("plain text");
        assert!(out.contains("◦ plain text"));
    }

    #[test]
    fn test_nested_structure_indents() {
        let out = treeviz_of("a [* b]");
        assert!(out.contains("    ◦ a \n"));
        assert!(out.contains("    𝐁 bold level-1\n"));
        assert!(out.contains("      ◦ b\n"));
    }

    #[test]
    fn test_unsupported_shows_raw() {
        let out = treeviz_of("[broken");
        assert!(out.contains("∅ [broken"));
    }
}
