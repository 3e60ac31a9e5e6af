//! Markdown serialization (scrib → Markdown/HTML fragments)
//!
//! A rendered line is the concatenation of its symbols: raw characters pass
//! through unchanged, tokens render themselves, and bracket interiors are
//! rendered recursively before being wrapped. Brackets whose rich parse failed
//! render their raw text, which reproduces the original input byte for byte.

use crate::ast::{Bracket, BracketKind, Document, EmphasisKind, Symbol};
use crate::formats::markdown::link::Link;

/// Serialize a parsed document, one rendered fragment per input line.
pub fn serialize_to_markdown(doc: &Document) -> String {
    let mut out = String::new();
    for line in &doc.lines {
        out.push_str(&symbols_to_markdown(&line.symbols));
        out.push('\n');
    }
    out
}

/// Render a symbol sequence to one Markdown/HTML fragment.
pub fn symbols_to_markdown(symbols: &[Symbol]) -> String {
    symbols.iter().map(symbol_to_markdown).collect()
}

fn symbol_to_markdown(symbol: &Symbol) -> String {
    match symbol {
        Symbol::Raw(c) => c.to_string(),
        Symbol::Hashtag(hashtag) => hashtag.to_markdown(),
        Symbol::Bracket(bracket) => bracket_to_markdown(bracket),
    }
}

fn bracket_to_markdown(bracket: &Bracket) -> String {
    match bracket.kind {
        BracketKind::Empty | BracketKind::Unsupported => bracket.raw.clone(),
        BracketKind::Link => Link::new(symbols_to_markdown(&bracket.symbols)).to_markdown(),
        BracketKind::DoubleBold => bold(1, &symbols_to_markdown(&bracket.symbols)),
        BracketKind::Emphasis { kind, level } => {
            let text = symbols_to_markdown(&bracket.symbols);
            match kind {
                EmphasisKind::Bold => bold(level, &text),
                EmphasisKind::Strike => format!("<del>{text}</del>"),
                EmphasisKind::Underline => format!("<u>{text}</u>"),
            }
        }
    }
}

/// Level 1 is plain bold. Higher levels scale the font, 0.8em base plus 0.2em
/// per level, and carry a level-indexed class for styling.
fn bold(level: usize, text: &str) -> String {
    if level <= 1 {
        format!("<b>{text}</b>")
    } else {
        let size = 0.8 + 0.2 * level as f64;
        format!("<b style=\"font-size:{size:.1}em;\" class=\"level-{level}\">{text}</b>")
    }
}
