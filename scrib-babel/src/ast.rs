//! The symbol tree produced by parsing scrib
//!
//!     A parsed line is an ordered sequence of symbols: raw characters, hashtag tokens,
//!     and bracket tokens. Bracket tokens carry their recursively parsed interior plus
//!     the exact source characters they consumed, so a token whose richer interpretation
//!     failed can always be rendered back as the literal text it came from.
//!
//!     Symbols live for one parse/render cycle. Nothing here is mutated after the
//!     tokenizer returns, and nothing persists across lines.

use crate::formats::scrib::hashtag::Hashtag;
use serde::{Deserialize, Serialize};

/// A parsed scrib source: one entry per input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub lines: Vec<Line>,
}

impl Document {
    pub fn with_lines(lines: Vec<Line>) -> Self {
        Document { lines }
    }
}

/// One parsed line: an ordered sequence of symbols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub symbols: Vec<Symbol>,
}

impl Line {
    pub fn with_symbols(symbols: Vec<Symbol>) -> Self {
        Line { symbols }
    }

    /// The exact source text this line was parsed from.
    pub fn raw_text(&self) -> String {
        self.symbols.iter().map(Symbol::raw_text).collect()
    }
}

/// One parsed unit of a line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Symbol {
    /// A literal character not absorbed into any token
    Raw(char),
    /// A hashtag token (`#topic`)
    Hashtag(Hashtag),
    /// A bracket construct (`[...]` and its variants)
    Bracket(Bracket),
}

impl Symbol {
    /// The exact source characters this symbol was parsed from.
    pub fn raw_text(&self) -> String {
        match self {
            Symbol::Raw(c) => c.to_string(),
            Symbol::Hashtag(hashtag) => hashtag.raw().to_string(),
            Symbol::Bracket(bracket) => bracket.raw.clone(),
        }
    }
}

/// A bracket construct and its resolved variant
///
/// `raw` reconstructs the consumed source byte for byte, delimiters included.
/// `symbols` holds the parsed interior and is non-empty exactly when `kind`
/// is a rich variant (not `Empty`/`Unsupported`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub raw: String,
    pub kind: BracketKind,
    pub symbols: Vec<Symbol>,
}

/// The resolved interpretation of a bracket construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketKind {
    /// A bare `[` (or a failed richer parse) rendered as its literal text
    Unsupported,
    /// The two-character construct `[]`
    Empty,
    /// Doubled-bracket bold: `[[text]]`
    DoubleBold,
    /// Control-char emphasis: `[* text]`, `[-- text]`, ...
    Emphasis { kind: EmphasisKind, level: usize },
    /// A wiki link: `[text]`
    Link,
}

/// Which emphasis a control character selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmphasisKind {
    /// `*`
    Bold,
    /// `-`
    Strike,
    /// `_`
    Underline,
}

impl std::fmt::Display for EmphasisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmphasisKind::Bold => write!(f, "bold"),
            EmphasisKind::Strike => write!(f, "strike"),
            EmphasisKind::Underline => write!(f, "underline"),
        }
    }
}
