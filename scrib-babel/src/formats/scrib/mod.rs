//! Scrib format implementation (parsing side)
//!
//! Scrib is line oriented: every line is tokenized independently and there is
//! no state across lines. Parsing a source is therefore just splitting on
//! newlines and running the tokenizer per line; the interesting work lives in
//! [parser].

pub mod cursor;
pub mod hashtag;
pub mod parser;

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for the scrib notation
pub struct ScribFormat;

impl Format for ScribFormat {
    fn name(&self) -> &str {
        "scrib"
    }

    fn description(&self) -> &str {
        "Scrib bracket wiki notation"
    }

    fn file_extensions(&self) -> &[&str] {
        &["scrib"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let lines = source.lines().map(parser::parse_line).collect();
        Ok(Document { lines })
    }
}
