//! Format conversion for scrib documents
//!
//!     Scrib is a lightweight bracket-based wiki notation. A line of scrib is plain text
//!     plus three kinds of inline tokens: hashtags (`#topic`), bracket constructs
//!     (`[link]`, `[* bold]`, `[- strike]`, `[_ underline]`, `[[bold]]`), and everything
//!     else passing through as raw characters. This crate parses that notation and
//!     serializes the result to Markdown/HTML fragments.
//!
//!     This is a pure lib, that is, it powers the scrib-cli but is shell agnostic: no code
//!     here should suppose a shell environment, be it std print, env vars etc.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── ast.rs                  # Symbol tree produced by parsing
//!     ├── formats
//!     │   ├── scrib               # parsing side: cursor, tokenizer, hashtag
//!     │   ├── markdown            # serialization side: renderer, link builder
//!     │   └── treeviz             # symbol tree visualization (inspect)
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The interesting work is the scrib tokenizer (formats/scrib/parser.rs). Brackets are
//!     ambiguous: `[` may open a link, an emphasis block, a doubled-bracket bold, or turn
//!     out to be nothing at all. The tokenizer therefore parses speculatively over a single
//!     forward cursor and every bracket keeps the exact characters it consumed, so that a
//!     failed parse falls back to verbatim text instead of dropping input. Serialization
//!     (formats/markdown) is a plain recursive walk over the symbol tree.
//!
//! Formats
//!
//!     Format capabilities are expressed with the Format trait: a name, file extensions,
//!     and parse() and/or serialize() methods. The FormatRegistry provides discovery and
//!     extension-based detection. Scrib itself is the only parsing format; markdown and
//!     treeviz are serialization formats (treeviz exists for inspection, not publishing).
//!
//! Library Choices
//!
//!     The scrib grammar is the point of this crate, so the parser is hand written rather
//!     than delegated. The only outside concern is deriving link targets from link text,
//!     which needs component percent-encoding; we use the percent-encoding crate for that.

pub mod ast;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use ast::{Bracket, BracketKind, Document, EmphasisKind, Line, Symbol};
pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;

/// Render a single line of scrib to a Markdown/HTML fragment.
///
/// This is the line-at-a-time contract the notation is defined by: one line in,
/// one rendered string out. Malformed constructs degrade to their literal text,
/// so this never fails.
pub fn line_to_markdown(line: &str) -> String {
    let line = formats::scrib::parser::parse_line(line);
    formats::markdown::serializer::symbols_to_markdown(&line.symbols)
}
