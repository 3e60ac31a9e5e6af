//! Shared helpers for the integration tests

use scrib_babel::ast::Document;
use scrib_babel::format::Format;
use scrib_babel::formats::scrib::ScribFormat;

/// Parse scrib source into a document.
pub fn parse(source: &str) -> Document {
    ScribFormat.parse(source).expect("scrib parsing cannot fail")
}

/// Render one line of scrib to its Markdown fragment.
pub fn render(line: &str) -> String {
    scrib_babel::line_to_markdown(line)
}
