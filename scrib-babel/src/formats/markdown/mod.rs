//! Markdown format implementation
//!
//! Serialization only. The output is a Markdown fragment per line; emphasis
//! renders as inline HTML (`<b>`, `<del>`, `<u>`) since Markdown has no
//! intensity levels or underline, and links and hashtags render as relative
//! Markdown references to their page files.

pub mod link;
pub mod serializer;

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for Markdown output
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown/HTML fragments"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(doc))
    }
}
