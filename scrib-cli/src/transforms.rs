//! CLI-specific transforms
//!
//! This module defines the transforms available to `scrib inspect`. Each
//! transform parses the source and presents one view of the result:
//!
//! - `ast-json`:    the symbol tree as pretty-printed JSON
//! - `ast-treeviz`: the symbol tree as an indented visualization
//! - `markdown`:    the rendered output (same as converting)

use scrib_babel::ast::Document;
use scrib_babel::format::Format;
use scrib_babel::formats::markdown::MarkdownFormat;
use scrib_babel::formats::scrib::ScribFormat;
use scrib_babel::formats::treeviz::to_treeviz_str;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["ast-json", "ast-treeviz", "markdown"];

/// Execute a named transform on a source file
pub fn execute_transform(source: &str, transform_name: &str) -> Result<String, String> {
    let doc = parse(source)?;
    match transform_name {
        "ast-json" => serde_json::to_string_pretty(&doc)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "ast-treeviz" => Ok(to_treeviz_str(&doc)),
        "markdown" => MarkdownFormat
            .serialize(&doc)
            .map_err(|e| format!("Transform failed: {e}")),
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn parse(source: &str) -> Result<Document, String> {
    ScribFormat
        .parse(source)
        .map_err(|e| format!("Parse failed: {e}"))
}
